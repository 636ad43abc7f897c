//! Blocking MapQuest client implementing both provider traits.

mod models;

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;

use super::{
	DirectionsProvider, Maneuver, ProviderError, ProviderResult, SearchHit, SearchProvider,
};

pub const DEFAULT_BASE_URL: &str = "https://www.mapquestapi.com";
pub const DEFAULT_RADIUS: u32 = 50;
pub const DEFAULT_MAX_MATCHES: u32 = 5;
pub const DEFAULT_COUNTRY: &str = "PH";
pub const DEFAULT_CATEGORY: &str = "ADM1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const RADIUS_ENDPOINT: &str = "search/v2/radius";
const ROUTE_ENDPOINT: &str = "directions/v2/route";

/// Connection and query parameters for [`MapQuestClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapQuestOptions {
	pub api_key: String,
	pub base_url: String,
	/// Search radius in miles around the typed origin.
	pub radius: u32,
	pub max_matches: u32,
	pub country: String,
	pub category: String,
	pub timeout: Duration,
}

impl MapQuestOptions {
	pub fn new(api_key: impl Into<String>) -> Self {
		Self {
			api_key: api_key.into(),
			..Self::default()
		}
	}
}

impl Default for MapQuestOptions {
	fn default() -> Self {
		Self {
			api_key: String::new(),
			base_url: DEFAULT_BASE_URL.to_string(),
			radius: DEFAULT_RADIUS,
			max_matches: DEFAULT_MAX_MATCHES,
			country: DEFAULT_COUNTRY.to_string(),
			category: DEFAULT_CATEGORY.to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

/// Location search and directions against the MapQuest web APIs.
#[derive(Debug)]
pub struct MapQuestClient {
	http: Client,
	options: MapQuestOptions,
}

impl MapQuestClient {
	pub fn new(options: MapQuestOptions) -> ProviderResult<Self> {
		let http = Client::builder()
			.timeout(options.timeout)
			.build()
			.map_err(|err| ProviderError::request("client", err))?;
		Ok(Self { http, options })
	}

	#[must_use]
	pub fn options(&self) -> &MapQuestOptions {
		&self.options
	}

	fn endpoint_url(&self, endpoint: &str) -> String {
		format!("{}/{}", self.options.base_url.trim_end_matches('/'), endpoint)
	}

	fn get(&self, endpoint: &'static str, params: &[(&str, String)]) -> ProviderResult<String> {
		let url = self.endpoint_url(endpoint);
		debug!("GET {url}");
		let response = self
			.http
			.get(&url)
			.query(&[("key", self.options.api_key.as_str())])
			.query(params)
			.send()
			.map_err(|err| ProviderError::request(endpoint, err))?;

		let status = response.status();
		if !status.is_success() {
			return Err(ProviderError::Status {
				endpoint,
				status: status.as_u16(),
			});
		}

		response
			.text()
			.map_err(|err| ProviderError::request(endpoint, err))
	}
}

impl SearchProvider<String> for MapQuestClient {
	fn search(&self, text: &str) -> ProviderResult<Option<Vec<SearchHit<String>>>> {
		let body = self.get(
			RADIUS_ENDPOINT,
			&[
				("origin", text.to_string()),
				("radius", self.options.radius.to_string()),
				("maxMatches", self.options.max_matches.to_string()),
				("country", self.options.country.clone()),
				("category", self.options.category.clone()),
			],
		)?;

		let labels = models::decode_locations(&body).map_err(|err| {
			warn!("location search for '{text}' failed: {err}");
			err
		})?;
		debug!("location search for '{text}' returned {labels:?}");

		Ok(Some(labels.into_iter().map(SearchHit::Bare).collect()))
	}
}

impl DirectionsProvider for MapQuestClient {
	fn route(&self, from: &str, to: &str) -> ProviderResult<Option<Vec<Maneuver>>> {
		let body = self.get(
			ROUTE_ENDPOINT,
			&[("from", from.to_string()), ("to", to.to_string())],
		)?;

		let maneuvers = models::decode_route(&body)?;
		match &maneuvers {
			Some(steps) => debug!("route {from} -> {to}: {} maneuvers", steps.len()),
			None => debug!("route {from} -> {to}: no route in response"),
		}
		Ok(maneuvers)
	}
}
