//! Draft trip configuration and its persisted JSON form.
//!
//! Wire shape:
//! `{"selectedDestination": "Goa"|null, "numberOfDays": 3, "numberOfTravelers": 2, "hotelType": "Budget"|null}`

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;
use crate::pricing::validation::{MAX_DAYS, MAX_TRAVELERS, MIN_DAYS, MIN_TRAVELERS};
use crate::pricing::{Destination, HotelType, PartialTripConfig, TripConfig};

pub const DEFAULT_DAYS: i32 = 3;
pub const DEFAULT_TRAVELERS: i32 = 2;

/// The in-progress trip the user is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    #[serde(rename = "selectedDestination")]
    pub destination: Option<Destination>,
    #[serde(rename = "numberOfDays")]
    pub days: i32,
    #[serde(rename = "numberOfTravelers")]
    pub travelers: i32,
    pub hotel_type: Option<HotelType>,
}

impl Default for TripDraft {
    fn default() -> Self {
        Self {
            destination: None,
            days: DEFAULT_DAYS,
            travelers: DEFAULT_TRAVELERS,
            hotel_type: None,
        }
    }
}

impl TripDraft {
    pub fn as_partial(&self) -> PartialTripConfig {
        PartialTripConfig {
            destination: self.destination,
            days: Some(self.days),
            travelers: Some(self.travelers),
            hotel_type: self.hotel_type,
        }
    }

    /// Full config once destination and hotel type are chosen
    pub fn complete(&self) -> Option<TripConfig> {
        self.as_partial().complete()
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a saved snapshot.
    ///
    /// Only unparseable JSON is an error. Each field is read on its own:
    /// a missing or ill-typed field keeps its default without discarding
    /// the others. Counts are rounded and clamped into range.
    pub fn decode(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        let mut draft = Self::default();

        let Some(fields) = value.as_object() else {
            debug!("Saved trip config is not a JSON object, using defaults");
            return Ok(draft);
        };

        if let Some(destination) = enum_field::<Destination>(fields, "selectedDestination") {
            draft.destination = Some(destination);
        }
        if let Some(days) = count_field(fields, "numberOfDays") {
            draft.days = clamp_days(days);
        }
        if let Some(travelers) = count_field(fields, "numberOfTravelers") {
            draft.travelers = clamp_travelers(travelers);
        }
        if let Some(hotel_type) = enum_field::<HotelType>(fields, "hotelType") {
            draft.hotel_type = Some(hotel_type);
        }

        Ok(draft)
    }
}

pub fn clamp_days(days: i32) -> i32 {
    days.clamp(MIN_DAYS, MAX_DAYS)
}

pub fn clamp_travelers(travelers: i32) -> i32 {
    travelers.clamp(MIN_TRAVELERS, MAX_TRAVELERS)
}

fn enum_field<T: std::str::FromStr>(fields: &Map<String, Value>, name: &str) -> Option<T> {
    let value = fields.get(name)?;
    let parsed = value.as_str().and_then(|s| s.parse().ok());
    if parsed.is_none() && !value.is_null() {
        debug!(field = name, value = %value, "Ignoring unrecognised saved value");
    }
    parsed
}

fn count_field(fields: &Map<String, Value>, name: &str) -> Option<i32> {
    let value = fields.get(name)?;
    match value.as_f64().filter(|n| n.is_finite()) {
        // `as` saturates, clamping takes care of the rest
        Some(n) => Some(n.round() as i32),
        None => {
            debug!(field = name, value = %value, "Ignoring non-numeric saved value");
            None
        }
    }
}
