use std::time::Duration;

use mqx::SearchBehavior;
use serde::Deserialize;

use crate::cli::CliArgs;

/// How the pickers search, prior to defaults being filled in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) blank_search_value: Option<String>,
	pub(super) rerun_on_update: Option<bool>,
	pub(super) stop_on_update: Option<bool>,
	pub(super) return_only_on_submit: Option<bool>,
	pub(super) clear_on_submit: Option<bool>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(debounce) = cli.debounce_ms {
			self.debounce_ms = Some(debounce);
		}
		if let Some(value) = cli.blank_search_value.clone() {
			self.blank_search_value = Some(value);
		}
		if let Some(value) = cli.rerun_on_update {
			self.rerun_on_update = Some(value);
		}
		if let Some(value) = cli.stop_on_update {
			self.stop_on_update = Some(value);
		}
		if let Some(value) = cli.return_only_on_submit {
			self.return_only_on_submit = Some(value);
		}
		if let Some(value) = cli.clear_on_submit {
			self.clear_on_submit = Some(value);
		}
	}

	pub(super) fn resolve(self) -> SearchBehavior {
		let defaults = SearchBehavior::default();
		SearchBehavior {
			debounce: self
				.debounce_ms
				.map(Duration::from_millis)
				.unwrap_or(defaults.debounce),
			rerun_on_update: self.rerun_on_update.unwrap_or(defaults.rerun_on_update),
			stop_on_update: self.stop_on_update.unwrap_or(defaults.stop_on_update),
			blank_search_value: self.blank_search_value.or(defaults.blank_search_value),
			return_only_on_submit: self
				.return_only_on_submit
				.unwrap_or(defaults.return_only_on_submit),
			clear_on_submit: self.clear_on_submit.unwrap_or(defaults.clear_on_submit),
		}
	}
}
