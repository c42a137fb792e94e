//! Field-level validation of trip configurations.

use std::collections::BTreeMap;

use serde::Serialize;

use super::models::{PartialTripConfig, TripField};

pub const MIN_DAYS: i32 = 1;
pub const MAX_DAYS: i32 = 10;
pub const MIN_TRAVELERS: i32 = 1;
pub const MAX_TRAVELERS: i32 = 6;

/// Outcome of validating a (possibly partial) configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<TripField, String>,
}

impl ValidationResult {
    fn from_errors(errors: BTreeMap<TripField, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Message attached to `field`, if any
    pub fn error(&self, field: TripField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Validate a trip configuration.
///
/// Every field is checked on its own; a missing destination does not stop
/// the day count from being checked. Each field yields at most one message.
pub fn validate_config(config: &PartialTripConfig) -> ValidationResult {
    let mut errors = BTreeMap::new();

    if config.destination.is_none() {
        errors.insert(TripField::Destination, "Please select a destination".to_string());
    }

    match config.days {
        None => {
            errors.insert(TripField::Days, "Minimum 1 day required".to_string());
        }
        Some(days) if days < MIN_DAYS => {
            errors.insert(TripField::Days, "Minimum 1 day required".to_string());
        }
        Some(days) if days > MAX_DAYS => {
            errors.insert(TripField::Days, "Maximum 10 days allowed".to_string());
        }
        Some(_) => {}
    }

    match config.travelers {
        None => {
            errors.insert(TripField::Travelers, "Minimum 1 traveler required".to_string());
        }
        Some(travelers) if travelers < MIN_TRAVELERS => {
            errors.insert(TripField::Travelers, "Minimum 1 traveler required".to_string());
        }
        Some(travelers) if travelers > MAX_TRAVELERS => {
            errors.insert(TripField::Travelers, "Maximum 6 travelers allowed".to_string());
        }
        Some(_) => {}
    }

    if config.hotel_type.is_none() {
        errors.insert(TripField::Hotel, "Please select a hotel type".to_string());
    }

    ValidationResult::from_errors(errors)
}
