//! Pricing engine module for the trip planner.
//!
//! Stateless, deterministic pricing, validation and messaging for trip
//! configurations. Nothing here knows about the planner or storage.

pub mod calculators;
pub mod messages;
pub mod models;
pub mod responses;
pub mod validation;

// Re-export commonly used items
pub use calculators::{compute_price, format_price, round_money, PriceBreakdown};
pub use messages::generate_message;
pub use models::{Destination, HotelType, PartialTripConfig, TripConfig, TripField, UnknownValue};
pub use responses::{BookingPreview, Money, PriceLine, PriceSummary};
pub use validation::{validate_config, ValidationResult};
