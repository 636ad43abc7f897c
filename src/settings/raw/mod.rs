use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod mapquest;
mod search;
mod ui;

use mapquest::{API_KEY_ENV, MapQuestSection};
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	mapquest: MapQuestSection,
	search: SearchSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.mapquest.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			api_key: detect_source(
				cli.api_key.is_some(),
				self.mapquest.api_key.is_some(),
				"MQX__MAPQUEST__API_KEY",
				"--api-key",
				"mapquest.api_key",
			)
			.or_else(|| {
				env::var_os(API_KEY_ENV).map(|_| SettingSource::Environment(API_KEY_ENV))
			}),
			base_url: detect_source(
				cli.base_url.is_some(),
				self.mapquest.base_url.is_some(),
				"MQX__MAPQUEST__BASE_URL",
				"--base-url",
				"mapquest.base_url",
			),
			radius: detect_source(
				cli.radius.is_some(),
				self.mapquest.radius.is_some(),
				"MQX__MAPQUEST__RADIUS",
				"--radius",
				"mapquest.radius",
			),
			max_matches: detect_source(
				cli.max_matches.is_some(),
				self.mapquest.max_matches.is_some(),
				"MQX__MAPQUEST__MAX_MATCHES",
				"--max-matches",
				"mapquest.max_matches",
			),
			timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.mapquest.timeout_secs.is_some(),
				"MQX__MAPQUEST__TIMEOUT_SECS",
				"--timeout",
				"mapquest.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"MQX__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let mapquest = self.mapquest.resolve();
		let search = self.search.resolve();
		let (ui, theme) = self.ui.finalize(search);

		let config = ResolvedConfig {
			mapquest,
			ui,
			theme,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
