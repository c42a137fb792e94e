//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no storage or controller access.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::models::TripConfig;

/// Group discount applies to strictly more travelers than this
pub const GROUP_DISCOUNT_THRESHOLD: i32 = 4;

/// Share of the subtotal taken off for groups
pub const GROUP_DISCOUNT_RATE: Decimal = dec!(0.10);

/// Extended-stay discount applies to strictly more days than this
pub const EXTENDED_STAY_THRESHOLD: i32 = 7;

/// Flat amount taken off for extended stays (INR)
pub const EXTENDED_STAY_DISCOUNT: Decimal = dec!(2000);

/// Itemized price for a trip.
///
/// Always recomputed wholesale from a [`TripConfig`], never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price_per_day: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub hotel_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub group_discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub extended_stay_discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_discounts: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub final_price: Decimal,
    pub has_group_discount: bool,
    pub has_extended_stay_discount: bool,
}

/// Calculate trip price with a detailed breakdown.
///
/// The base price is per day, not per traveler; travelers only decide
/// discount eligibility. Discounts apply after the hotel multiplier and
/// are independent of each other. Out-of-range counts are not rejected
/// here, the arithmetic simply runs on whatever was given.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use trip_planner::pricing::{compute_price, Destination, HotelType, TripConfig};
///
/// let breakdown = compute_price(&TripConfig {
///     destination: Destination::Jaipur,
///     days: 10,
///     travelers: 5,
///     hotel_type: HotelType::Luxury,
/// });
/// assert_eq!(breakdown.subtotal, dec!(40000));
/// assert_eq!(breakdown.total_discounts, dec!(6000));
/// assert_eq!(breakdown.final_price, dec!(34000));
/// ```
pub fn compute_price(config: &TripConfig) -> PriceBreakdown {
    let base_price_per_day = config.destination.base_price_per_day();
    let base_price = base_price_per_day * Decimal::from(config.days);

    let hotel_multiplier = config.hotel_type.multiplier();
    let subtotal = base_price * hotel_multiplier;

    let has_group_discount = config.travelers > GROUP_DISCOUNT_THRESHOLD;
    let group_discount = if has_group_discount {
        subtotal * GROUP_DISCOUNT_RATE
    } else {
        Decimal::ZERO
    };

    let has_extended_stay_discount = config.days > EXTENDED_STAY_THRESHOLD;
    let extended_stay_discount = if has_extended_stay_discount {
        EXTENDED_STAY_DISCOUNT
    } else {
        Decimal::ZERO
    };

    let total_discounts = group_discount + extended_stay_discount;
    let final_price = (subtotal - total_discounts).max(Decimal::ZERO);

    PriceBreakdown {
        base_price_per_day,
        base_price,
        hotel_multiplier,
        subtotal,
        group_discount,
        extended_stay_discount,
        total_discounts,
        final_price,
        has_group_discount,
        has_extended_stay_discount,
    }
}

/// Round to `places` decimals, halves away from zero.
///
/// Matches how browsers round currency for display.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use trip_planner::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount as whole Indian Rupees with lakh/crore grouping,
/// e.g. `₹1,23,456`.
pub fn format_price(amount: Decimal) -> String {
    let rounded = round_money(amount, 0);
    if rounded.is_zero() {
        return "₹0".to_string();
    }

    let digits = rounded.abs().trunc().normalize().to_string();
    let grouped = group_indian(&digits);

    if rounded.is_sign_negative() {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Last three digits form one group, the rest go in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
