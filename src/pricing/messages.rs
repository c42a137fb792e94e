//! Booking preview message generation.

use super::calculators::{EXTENDED_STAY_THRESHOLD, GROUP_DISCOUNT_THRESHOLD};
use super::models::{HotelType, TripConfig};

const LUXURY_NOTE: &str =
    "Arrangements include a luxury stay with elevated services throughout the schedule.";
const EXTENDED_PACE_NOTE: &str = "The timetable allows additional downtime for an unhurried pace.";
const LARGE_GROUP_NOTE: &str =
    "Logistics account for a larger group with coordinated activities and transfers.";
const BALANCED_NOTE: &str = "Activities and transfers follow a balanced, well-paced itinerary.";

/// Build the personalised message shown in the booking preview.
///
/// Every matching note is appended in a fixed order (luxury, extended
/// pace, large group); the balanced note is used only when none match.
pub fn generate_message(config: &TripConfig) -> String {
    let traveler_label = if config.travelers == 1 {
        "solo traveler".to_string()
    } else {
        format!("group of {}", config.travelers)
    };

    let base = format!(
        "Itinerary prepared for a {}-day plan in {} for a {}.",
        config.days, config.destination, traveler_label
    );

    let mut notes = Vec::new();
    if config.hotel_type == HotelType::Luxury {
        notes.push(LUXURY_NOTE);
    }
    if config.days > EXTENDED_STAY_THRESHOLD {
        notes.push(EXTENDED_PACE_NOTE);
    }
    if config.travelers > GROUP_DISCOUNT_THRESHOLD {
        notes.push(LARGE_GROUP_NOTE);
    }
    if notes.is_empty() {
        notes.push(BALANCED_NOTE);
    }

    format!("{} {}", base, notes.join(" "))
}
