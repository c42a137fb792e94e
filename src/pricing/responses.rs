//! Presentation DTOs built from a price breakdown.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{format_price, PriceBreakdown};
use super::messages::generate_message;
use super::models::{Destination, HotelType, TripConfig};

/// Money value for display: exact amount plus its rendered form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub formatted: String,
}

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            formatted: format_price(amount),
        }
    }

    /// Rendered as a deduction, e.g. `-₹2,000`
    fn deduction(amount: Decimal) -> Self {
        Self {
            amount,
            formatted: format!("-{}", format_price(amount)),
        }
    }
}

/// One row of the price summary card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLine {
    pub label: String,
    pub value: Money,
    pub is_discount: bool,
}

/// Line items for the price summary card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    pub lines: Vec<PriceLine>,
    pub total: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
}

impl PriceSummary {
    /// Lay out a breakdown as display rows.
    ///
    /// Discount rows appear only for discounts that applied.
    pub fn from_breakdown(breakdown: &PriceBreakdown, days: i32) -> Self {
        let day_word = if days == 1 { "day" } else { "days" };
        let mut lines = vec![
            PriceLine {
                label: format!(
                    "Base Price ({}/day × {} {})",
                    format_price(breakdown.base_price_per_day),
                    days,
                    day_word
                ),
                value: Money::new(breakdown.base_price),
                is_discount: false,
            },
            PriceLine {
                label: format!("Hotel Multiplier ({}x)", breakdown.hotel_multiplier.normalize()),
                value: Money::new(breakdown.subtotal),
                is_discount: false,
            },
        ];

        if breakdown.has_group_discount {
            lines.push(PriceLine {
                label: "Group Discount (10%)".to_string(),
                value: Money::deduction(breakdown.group_discount),
                is_discount: true,
            });
        }
        if breakdown.has_extended_stay_discount {
            lines.push(PriceLine {
                label: "Extended Stay Discount".to_string(),
                value: Money::deduction(breakdown.extended_stay_discount),
                is_discount: true,
            });
        }

        let savings = (breakdown.total_discounts > Decimal::ZERO)
            .then(|| format!("You save {}", format_price(breakdown.total_discounts)));

        Self {
            lines,
            total: Money::new(breakdown.final_price),
            savings,
        }
    }
}

/// Booking preview shown once a trip plan has been generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingPreview {
    pub destination: Destination,
    pub duration: String,
    pub travelers: String,
    pub hotel_type: HotelType,
    pub total_cost: Money,
    pub message: String,
}

impl BookingPreview {
    pub fn new(config: &TripConfig, breakdown: &PriceBreakdown) -> Self {
        let duration = if config.days == 1 {
            "1 Day".to_string()
        } else {
            format!("{} Days", config.days)
        };
        let travelers = if config.travelers == 1 {
            "1 Person".to_string()
        } else {
            format!("{} People", config.travelers)
        };

        Self {
            destination: config.destination,
            duration,
            travelers,
            hotel_type: config.hotel_type,
            total_cost: Money::new(breakdown.final_price),
            message: generate_message(config),
        }
    }
}
