//! Trip configuration models and fixed reference data.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Destination offered by the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Goa,
    Manali,
    Jaipur,
}

impl Destination {
    /// All destinations in display order
    pub const ALL: [Destination; 3] = [Destination::Goa, Destination::Manali, Destination::Jaipur];

    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Goa => "Goa",
            Destination::Manali => "Manali",
            Destination::Jaipur => "Jaipur",
        }
    }

    /// Base price per day (INR), independent of traveler count
    pub fn base_price_per_day(&self) -> Decimal {
        match self {
            Destination::Goa => dec!(3000),
            Destination::Manali => dec!(2500),
            Destination::Jaipur => dec!(2000),
        }
    }

    /// Label used in the destination picker
    pub fn label(&self) -> String {
        format!("{}, India", self.as_str())
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownValue::new("destination", s))
    }
}

/// Accommodation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotelType {
    Budget,
    Premium,
    Luxury,
}

impl HotelType {
    /// All hotel types in display order
    pub const ALL: [HotelType; 3] = [HotelType::Budget, HotelType::Premium, HotelType::Luxury];

    pub fn as_str(&self) -> &'static str {
        match self {
            HotelType::Budget => "Budget",
            HotelType::Premium => "Premium",
            HotelType::Luxury => "Luxury",
        }
    }

    /// Multiplier applied to the base price
    pub fn multiplier(&self) -> Decimal {
        match self {
            HotelType::Budget => dec!(1),
            HotelType::Premium => dec!(1.5),
            HotelType::Luxury => dec!(2),
        }
    }

    /// Rate hint shown next to the hotel option, e.g. "1.5x rate"
    pub fn rate_label(&self) -> String {
        format!("{}x rate", self.multiplier().normalize())
    }
}

impl fmt::Display for HotelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotelType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HotelType::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| UnknownValue::new("hotel type", s))
    }
}

/// A name that is not part of a closed reference set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Fully specified trip configuration.
///
/// `days` and `travelers` are not range-checked here; see
/// [`validate_config`](super::validation::validate_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripConfig {
    pub destination: Destination,
    pub days: i32,
    pub travelers: i32,
    pub hotel_type: HotelType,
}

/// Trip configuration with any subset of fields set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialTripConfig {
    pub destination: Option<Destination>,
    pub days: Option<i32>,
    pub travelers: Option<i32>,
    pub hotel_type: Option<HotelType>,
}

impl PartialTripConfig {
    /// Promote to a full config when both enumerated fields and both counts are set
    pub fn complete(&self) -> Option<TripConfig> {
        Some(TripConfig {
            destination: self.destination?,
            days: self.days?,
            travelers: self.travelers?,
            hotel_type: self.hotel_type?,
        })
    }
}

impl From<TripConfig> for PartialTripConfig {
    fn from(config: TripConfig) -> Self {
        Self {
            destination: Some(config.destination),
            days: Some(config.days),
            travelers: Some(config.travelers),
            hotel_type: Some(config.hotel_type),
        }
    }
}

/// Form field a validation message is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripField {
    Destination,
    Days,
    Travelers,
    Hotel,
}

impl TripField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripField::Destination => "destination",
            TripField::Days => "days",
            TripField::Travelers => "travelers",
            TripField::Hotel => "hotel",
        }
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_price_table() {
        assert_eq!(Destination::Goa.base_price_per_day(), dec!(3000));
        assert_eq!(Destination::Manali.base_price_per_day(), dec!(2500));
        assert_eq!(Destination::Jaipur.base_price_per_day(), dec!(2000));
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(HotelType::Budget.multiplier(), dec!(1));
        assert_eq!(HotelType::Premium.multiplier(), dec!(1.5));
        assert_eq!(HotelType::Luxury.multiplier(), dec!(2));
        for hotel in HotelType::ALL {
            assert!(hotel.multiplier() >= Decimal::ONE);
        }
    }

    #[test]
    fn test_rate_labels() {
        assert_eq!(HotelType::Budget.rate_label(), "1x rate");
        assert_eq!(HotelType::Premium.rate_label(), "1.5x rate");
        assert_eq!(HotelType::Luxury.rate_label(), "2x rate");
    }

    #[test]
    fn test_destination_parse_exact_names() {
        for dest in Destination::ALL {
            assert_eq!(dest.as_str().parse::<Destination>(), Ok(dest));
        }
        let err = "goa".parse::<Destination>().unwrap_err();
        assert_eq!(err.kind, "destination");
        assert!("Paris".parse::<Destination>().is_err());
    }

    #[test]
    fn test_hotel_type_parse() {
        assert_eq!("Luxury".parse::<HotelType>(), Ok(HotelType::Luxury));
        assert!("Hostel".parse::<HotelType>().is_err());
    }

    #[test]
    fn test_destination_label() {
        assert_eq!(Destination::Manali.label(), "Manali, India");
    }

    #[test]
    fn test_partial_complete() {
        let partial = PartialTripConfig {
            destination: Some(Destination::Goa),
            days: Some(3),
            travelers: Some(2),
            hotel_type: None,
        };
        assert!(partial.complete().is_none());

        let full = PartialTripConfig {
            hotel_type: Some(HotelType::Budget),
            ..partial
        };
        assert_eq!(
            full.complete(),
            Some(TripConfig {
                destination: Destination::Goa,
                days: 3,
                travelers: 2,
                hotel_type: HotelType::Budget,
            })
        );
    }

    #[test]
    fn test_trip_field_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TripField::Hotel).unwrap(), "\"hotel\"");
        assert_eq!(TripField::Travelers.to_string(), "travelers");
    }
}
