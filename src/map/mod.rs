//! Route markers and the renderer contract used by the host.
//!
//! [`MapView`] is the in-memory renderer backing the terminal map; drawing
//! happens in [`crate::ui::components::map`].

use thiserror::Error;

use crate::provider::{Coordinate, Maneuver};

/// Bounding box of the Philippine archipelago, used when nothing is plotted.
pub const PHILIPPINES: Viewport = Viewport {
	lng: [116.0, 127.0],
	lat: [4.5, 21.5],
};

/// Smallest span (in degrees) of a fitted viewport.
const MIN_SPAN: f64 = 0.02;

/// A labelled point on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
	pub position: Coordinate,
	pub label: String,
}

impl Marker {
	pub fn new(position: Coordinate, label: impl Into<String>) -> Self {
		Self {
			position,
			label: label.into(),
		}
	}
}

impl From<&Maneuver> for Marker {
	fn from(maneuver: &Maneuver) -> Self {
		Self::new(maneuver.start, maneuver.narrative.clone())
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
	#[error("Directions not available.")]
	NoMarkers,
}

/// Anything able to display a sequence of markers.
pub trait MapRenderer {
	/// Display `markers`, refusing absent or empty input.
	fn render(&mut self, markers: Option<Vec<Marker>>) -> Result<(), MapError>;
}

/// Longitude/latitude ranges shown by the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
	pub lng: [f64; 2],
	pub lat: [f64; 2],
}

impl Viewport {
	/// Smallest padded box containing every marker.
	#[must_use]
	pub fn fit(markers: &[Marker]) -> Self {
		let Some(first) = markers.first() else {
			return PHILIPPINES;
		};

		let mut lng = [first.position.lng, first.position.lng];
		let mut lat = [first.position.lat, first.position.lat];
		for marker in &markers[1..] {
			lng[0] = lng[0].min(marker.position.lng);
			lng[1] = lng[1].max(marker.position.lng);
			lat[0] = lat[0].min(marker.position.lat);
			lat[1] = lat[1].max(marker.position.lat);
		}

		Self {
			lng: pad(lng),
			lat: pad(lat),
		}
	}

	#[must_use]
	pub fn contains(&self, position: Coordinate) -> bool {
		(self.lng[0]..=self.lng[1]).contains(&position.lng)
			&& (self.lat[0]..=self.lat[1]).contains(&position.lat)
	}
}

fn pad([low, high]: [f64; 2]) -> [f64; 2] {
	let span = (high - low).max(MIN_SPAN);
	let center = (low + high) / 2.0;
	let half = span * 0.6;
	[center - half, center + half]
}

/// Renderer state for the terminal map: the markers of the last route.
#[derive(Debug, Default, Clone)]
pub struct MapView {
	markers: Vec<Marker>,
}

impl MapView {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn markers(&self) -> &[Marker] {
		&self.markers
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.markers.is_empty()
	}

	pub fn clear(&mut self) {
		self.markers.clear();
	}

	#[must_use]
	pub fn viewport(&self) -> Viewport {
		Viewport::fit(&self.markers)
	}
}

impl MapRenderer for MapView {
	fn render(&mut self, markers: Option<Vec<Marker>>) -> Result<(), MapError> {
		match markers {
			Some(markers) if !markers.is_empty() => {
				self.markers = markers;
				Ok(())
			}
			_ => {
				self.markers.clear();
				Err(MapError::NoMarkers)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn marker(lat: f64, lng: f64) -> Marker {
		Marker::new(Coordinate::new(lat, lng), "step")
	}

	#[test]
	fn empty_or_absent_markers_are_refused() {
		let mut view = MapView::new();
		assert_eq!(view.render(None), Err(MapError::NoMarkers));
		assert_eq!(view.render(Some(Vec::new())), Err(MapError::NoMarkers));
		assert!(view.is_empty());
	}

	#[test]
	fn rendering_replaces_previous_markers() {
		let mut view = MapView::new();
		view.render(Some(vec![marker(14.6, 121.0), marker(14.7, 121.1)]))
			.unwrap();
		view.render(Some(vec![marker(10.3, 123.9)])).unwrap();
		assert_eq!(view.markers().len(), 1);
	}

	#[test]
	fn viewport_defaults_to_the_philippines() {
		assert_eq!(MapView::new().viewport(), PHILIPPINES);
	}

	#[test]
	fn viewport_fits_every_marker() {
		let markers = vec![marker(14.5995, 120.9842), marker(10.3157, 123.8854)];
		let viewport = Viewport::fit(&markers);
		for marker in &markers {
			assert!(viewport.contains(marker.position));
		}
		assert!(viewport.lat[1] - viewport.lat[0] > 14.5995 - 10.3157);
	}

	#[test]
	fn single_marker_gets_a_minimum_span() {
		let viewport = Viewport::fit(&[marker(14.0, 121.0)]);
		assert!(viewport.lng[1] - viewport.lng[0] >= MIN_SPAN);
		assert!(viewport.contains(Coordinate::new(14.0, 121.0)));
	}
}
