use std::fmt;

use serde::Serialize;

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
	pub lat: f64,
	pub lng: f64,
}

impl Coordinate {
	#[must_use]
	pub const fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}
}

impl fmt::Display for Coordinate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.5}, {:.5}", self.lat, self.lng)
	}
}

/// One step of a turn-by-turn route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Maneuver {
	pub start: Coordinate,
	pub narrative: String,
}

impl Maneuver {
	pub fn new(start: Coordinate, narrative: impl Into<String>) -> Self {
		Self {
			start,
			narrative: narrative.into(),
		}
	}
}
