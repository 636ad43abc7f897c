use mqx::{SearchBehavior, UiConfig};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Screen text and theme prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) from: Option<PickerSection>,
	pub(super) to: Option<PickerSection>,
	pub(super) button_label: Option<String>,
}

/// Raw configuration for one location picker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PickerSection {
	pub(super) label: Option<String>,
	pub(super) placeholder: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(label) = cli.from_label.clone() {
			self.from.get_or_insert_with(PickerSection::default).label = Some(label);
		}
		if let Some(placeholder) = cli.from_placeholder.clone() {
			self.from.get_or_insert_with(PickerSection::default).placeholder = Some(placeholder);
		}
		if let Some(label) = cli.to_label.clone() {
			self.to.get_or_insert_with(PickerSection::default).label = Some(label);
		}
		if let Some(placeholder) = cli.to_placeholder.clone() {
			self.to.get_or_insert_with(PickerSection::default).placeholder = Some(placeholder);
		}
		if let Some(label) = cli.button_label.clone() {
			self.button_label = Some(label);
		}
	}

	/// Fill defaults and split off the theme name.
	pub(super) fn finalize(self, search: SearchBehavior) -> (UiConfig, Option<String>) {
		let mut ui = UiConfig {
			search,
			..UiConfig::default()
		};
		if let Some(title) = self.title {
			ui.title = title;
		}
		if let Some(label) = self.button_label {
			ui.button_label = label;
		}
		if let Some(picker) = self.from {
			picker.apply(&mut ui.from);
		}
		if let Some(picker) = self.to {
			picker.apply(&mut ui.to);
		}

		(ui, self.theme)
	}
}

impl PickerSection {
	fn apply(self, target: &mut mqx::ComboboxUiConfig) {
		if let Some(label) = self.label {
			target.label = label;
		}
		if let Some(placeholder) = self.placeholder {
			target.placeholder = placeholder;
		}
	}
}
