use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => write!(f, "built-in default"),
		}
	}
}

/// Where each validated setting came from.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_key: Option<SettingSource>,
	pub(crate) base_url: Option<SettingSource>,
	pub(crate) radius: Option<SettingSource>,
	pub(crate) max_matches: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_api_key(&self) -> SettingSource {
		self.api_key.clone().unwrap_or(SettingSource::Default)
	}

	pub(crate) fn source_for_base_url(&self) -> SettingSource {
		self.base_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("mapquest.base_url"))
	}

	pub(crate) fn source_for_radius(&self) -> SettingSource {
		self.radius
			.clone()
			.unwrap_or(SettingSource::ConfigKey("mapquest.radius"))
	}

	pub(crate) fn source_for_max_matches(&self) -> SettingSource {
		self.max_matches
			.clone()
			.unwrap_or(SettingSource::ConfigKey("mapquest.max_matches"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("mapquest.timeout_secs"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}
