//! "Get Instructions": fetch a route and hand its maneuvers to the map.

use log::{info, warn};
use serde::Serialize;

use crate::map::{MapRenderer, Marker};
use crate::provider::{DirectionsProvider, Maneuver};

/// A plotted route between two committed locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
	pub from: String,
	pub to: String,
	pub maneuvers: Vec<Maneuver>,
}

/// Result of one directions request.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteStatus {
	Plotted(Trip),
	/// The provider answered without a usable route.
	NoRoute,
	/// The provider could not be reached or answered garbage.
	Failed(String),
}

/// Request directions and, when a route exists, render its maneuvers.
///
/// The renderer is only invoked for a non-empty route.
pub fn plan_route(
	directions: &dyn DirectionsProvider,
	renderer: &mut dyn MapRenderer,
	from: &str,
	to: &str,
) -> RouteStatus {
	let maneuvers = match directions.route(from, to) {
		Ok(Some(maneuvers)) if !maneuvers.is_empty() => maneuvers,
		Ok(_) => {
			info!("no route between '{from}' and '{to}'");
			return RouteStatus::NoRoute;
		}
		Err(err) => {
			warn!("directions request '{from}' -> '{to}' failed: {err}");
			return RouteStatus::Failed(err.to_string());
		}
	};

	let markers = maneuvers.iter().map(Marker::from).collect();
	if let Err(err) = renderer.render(Some(markers)) {
		warn!("map refused route '{from}' -> '{to}': {err}");
		return RouteStatus::NoRoute;
	}

	RouteStatus::Plotted(Trip {
		from: from.to_string(),
		to: to.to_string(),
		maneuvers,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::map::MapError;
	use crate::provider::{Coordinate, ProviderError, ProviderResult};

	struct FixedDirections(Option<Vec<Maneuver>>);

	impl DirectionsProvider for FixedDirections {
		fn route(&self, _from: &str, _to: &str) -> ProviderResult<Option<Vec<Maneuver>>> {
			Ok(self.0.clone())
		}
	}

	struct FailingDirections;

	impl DirectionsProvider for FailingDirections {
		fn route(&self, _from: &str, _to: &str) -> ProviderResult<Option<Vec<Maneuver>>> {
			Err(ProviderError::Status {
				endpoint: "directions/v2/route",
				status: 503,
			})
		}
	}

	#[derive(Default)]
	struct RecordingRenderer {
		calls: Vec<Option<Vec<Marker>>>,
	}

	impl MapRenderer for RecordingRenderer {
		fn render(&mut self, markers: Option<Vec<Marker>>) -> Result<(), MapError> {
			self.calls.push(markers);
			Ok(())
		}
	}

	#[test]
	fn missing_route_never_reaches_the_renderer() {
		let mut renderer = RecordingRenderer::default();

		let status = plan_route(&FixedDirections(None), &mut renderer, "Manila, NCR", "Atlantis");
		assert_eq!(status, RouteStatus::NoRoute);

		let status = plan_route(&FixedDirections(Some(Vec::new())), &mut renderer, "a", "b");
		assert_eq!(status, RouteStatus::NoRoute);

		assert!(renderer.calls.is_empty());
	}

	#[test]
	fn failures_are_reported_without_rendering() {
		let mut renderer = RecordingRenderer::default();
		let status = plan_route(&FailingDirections, &mut renderer, "a", "b");

		assert_eq!(
			status,
			RouteStatus::Failed("directions/v2/route responded with HTTP 503".into())
		);
		assert!(renderer.calls.is_empty());
	}

	#[test]
	fn maneuvers_become_markers_in_order() {
		let maneuvers = vec![
			Maneuver::new(Coordinate::new(14.5995, 120.9842), "Start out going north."),
			Maneuver::new(Coordinate::new(14.6760, 121.0437), "Welcome to Quezon City."),
		];
		let mut renderer = RecordingRenderer::default();

		let status = plan_route(
			&FixedDirections(Some(maneuvers.clone())),
			&mut renderer,
			"Manila, NCR",
			"Quezon City, NCR",
		);

		let RouteStatus::Plotted(trip) = status else {
			panic!("expected a plotted trip");
		};
		assert_eq!(trip.maneuvers, maneuvers);
		let markers = renderer.calls[0].as_ref().expect("markers");
		assert_eq!(markers[1].label, "Welcome to Quezon City.");
		assert_eq!(markers[0].position, Coordinate::new(14.5995, 120.9842));
	}
}
