use std::env;
use std::time::Duration;

use mqx::provider::mapquest::MapQuestOptions;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Environment variable consulted for the API key when nothing else sets it.
pub(super) const API_KEY_ENV: &str = "API_KEY";

/// MapQuest connection settings as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct MapQuestSection {
	pub(super) api_key: Option<String>,
	pub(super) base_url: Option<String>,
	pub(super) radius: Option<u32>,
	pub(super) max_matches: Option<u32>,
	pub(super) country: Option<String>,
	pub(super) category: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl MapQuestSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(key) = cli.api_key.clone() {
			self.api_key = Some(key);
		}
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(radius) = cli.radius {
			self.radius = Some(radius);
		}
		if let Some(max_matches) = cli.max_matches {
			self.max_matches = Some(max_matches);
		}
		if let Some(country) = cli.country.clone() {
			self.country = Some(country);
		}
		if let Some(category) = cli.category.clone() {
			self.category = Some(category);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn resolve(self) -> MapQuestOptions {
		let defaults = MapQuestOptions::default();
		let api_key = self
			.api_key
			.or_else(|| env::var(API_KEY_ENV).ok())
			.map(|key| key.trim().to_string())
			.unwrap_or_default();

		MapQuestOptions {
			api_key,
			base_url: self
				.base_url
				.map(|url| url.trim_end_matches('/').to_string())
				.unwrap_or(defaults.base_url),
			radius: self.radius.unwrap_or(defaults.radius),
			max_matches: self.max_matches.unwrap_or(defaults.max_matches),
			country: self.country.unwrap_or(defaults.country),
			category: self.category.unwrap_or(defaults.category),
			timeout: self
				.timeout_secs
				.map(Duration::from_secs)
				.unwrap_or(defaults.timeout),
		}
	}
}
