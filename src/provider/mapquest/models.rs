use serde::Deserialize;

use crate::provider::{Coordinate, Maneuver, ProviderError, ProviderResult};

#[derive(Debug, Deserialize)]
struct RadiusResponse {
	#[serde(default)]
	collections: Vec<Vec<Location>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Location {
	#[serde(default)]
	admin_area5: Option<String>,
	#[serde(default)]
	admin_area4: Option<String>,
}

impl Location {
	/// "City, Province", skipping whichever half is missing.
	fn label(&self) -> Option<String> {
		let parts: Vec<&str> = [&self.admin_area5, &self.admin_area4]
			.into_iter()
			.filter_map(|part| part.as_deref())
			.map(str::trim)
			.filter(|part| !part.is_empty())
			.collect();
		if parts.is_empty() {
			None
		} else {
			Some(parts.join(", "))
		}
	}
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
	route: Option<RouteBody>,
}

#[derive(Debug, Deserialize)]
struct RouteBody {
	#[serde(default)]
	legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Leg {
	#[serde(default)]
	maneuvers: Vec<RawManeuver>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawManeuver {
	start_point: LatLng,
	#[serde(default)]
	narrative: String,
}

#[derive(Debug, Deserialize)]
struct LatLng {
	lat: f64,
	lng: f64,
}

impl From<RawManeuver> for Maneuver {
	fn from(raw: RawManeuver) -> Self {
		Maneuver::new(Coordinate::new(raw.start_point.lat, raw.start_point.lng), raw.narrative)
	}
}

/// Extract candidate labels from a radius search body.
pub(super) fn decode_locations(body: &str) -> ProviderResult<Vec<String>> {
	let response: RadiusResponse =
		serde_json::from_str(body).map_err(|err| ProviderError::decode("search/v2/radius", err))?;

	let first = response
		.collections
		.into_iter()
		.next()
		.ok_or(ProviderError::NoLocations)?;

	Ok(first.iter().filter_map(Location::label).collect())
}

/// Extract the first leg's maneuvers from a directions body.
pub(super) fn decode_route(body: &str) -> ProviderResult<Option<Vec<Maneuver>>> {
	let response: RouteResponse = serde_json::from_str(body)
		.map_err(|err| ProviderError::decode("directions/v2/route", err))?;

	let Some(route) = response.route else {
		return Ok(None);
	};

	Ok(route
		.legs
		.into_iter()
		.next()
		.map(|leg| leg.maneuvers.into_iter().map(Maneuver::from).collect()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn locations_are_labelled_city_then_province() {
		let body = r#"{
			"collections": [[
				{"adminArea5": "Manila", "adminArea4": "NCR"},
				{"adminArea5": "Quezon City", "adminArea4": "NCR"},
				{"adminArea4": "Cebu"}
			]]
		}"#;

		let labels = decode_locations(body).unwrap();
		assert_eq!(labels, vec!["Manila, NCR", "Quezon City, NCR", "Cebu"]);
	}

	#[test]
	fn missing_collections_means_no_locations() {
		let err = decode_locations(r#"{"info": {"statuscode": 400}}"#).unwrap_err();
		assert!(matches!(err, ProviderError::NoLocations));
		assert_eq!(err.to_string(), "No Locations Found.");
	}

	#[test]
	fn malformed_search_body_is_a_decode_error() {
		let err = decode_locations("<html>").unwrap_err();
		assert!(matches!(err, ProviderError::Decode { .. }));
	}

	#[test]
	fn route_maneuvers_come_from_the_first_leg() {
		let body = r#"{
			"route": {
				"legs": [{
					"maneuvers": [
						{"startPoint": {"lat": 14.5995, "lng": 120.9842}, "narrative": "Head north."},
						{"startPoint": {"lat": 14.6760, "lng": 121.0437}, "narrative": "Arrive."}
					]
				}]
			}
		}"#;

		let maneuvers = decode_route(body).unwrap().expect("route");
		assert_eq!(maneuvers.len(), 2);
		assert_eq!(maneuvers[0].narrative, "Head north.");
		assert_eq!(maneuvers[1].start, Coordinate::new(14.6760, 121.0437));
	}

	#[test]
	fn body_without_route_has_no_maneuvers() {
		assert_eq!(decode_route(r#"{"info": {"messages": []}}"#).unwrap(), None);
		assert_eq!(decode_route(r#"{"route": {"legs": []}}"#).unwrap(), None);
	}
}
