use mqx::ui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let mapquest = &config.mapquest;

	if mapquest.api_key.is_empty() {
		return Err(ConfigError::invalid(
			"mapquest.api_key",
			"",
			sources.source_for_api_key(),
			"a MapQuest API key is required (set --api-key, mapquest.api_key or API_KEY)",
		));
	}

	if !mapquest.base_url.starts_with("http://") && !mapquest.base_url.starts_with("https://") {
		return Err(ConfigError::invalid(
			"mapquest.base_url",
			mapquest.base_url.clone(),
			sources.source_for_base_url(),
			"must be an http(s) URL",
		));
	}

	if mapquest.radius == 0 {
		return Err(ConfigError::invalid(
			"mapquest.radius",
			"0",
			sources.source_for_radius(),
			"must be greater than zero",
		));
	}

	if mapquest.max_matches == 0 {
		return Err(ConfigError::invalid(
			"mapquest.max_matches",
			"0",
			sources.source_for_max_matches(),
			"must be at least 1",
		));
	}

	if mapquest.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"mapquest.timeout_secs",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if let Some(theme) = &config.theme
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; choose one of {}", style::names().join(", ")),
		));
	}

	Ok(())
}
