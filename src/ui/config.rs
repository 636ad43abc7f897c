use std::time::Duration;

use crate::combobox::ComboboxOptions;

pub const DEFAULT_TITLE: &str = "MapQuest Explorer PH";
pub const DEFAULT_BUTTON_LABEL: &str = "Get Instructions";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Labels and session key for one of the location pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxUiConfig {
	pub key: String,
	pub label: String,
	pub placeholder: String,
}

impl ComboboxUiConfig {
	#[must_use]
	pub fn new(
		key: impl Into<String>,
		label: impl Into<String>,
		placeholder: impl Into<String>,
	) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			placeholder: placeholder.into(),
		}
	}

	/// Combobox options for this picker under the shared search behaviour.
	#[must_use]
	pub fn options<T>(&self, behavior: &SearchBehavior) -> ComboboxOptions<T> {
		let mut options = ComboboxOptions::new(self.key.clone())
			.with_label(self.label.clone())
			.with_placeholder(self.placeholder.clone())
			.clear_on_submit(behavior.clear_on_submit)
			.rerun_on_update(behavior.rerun_on_update)
			.stop_on_update(behavior.stop_on_update)
			.return_only_on_submit(behavior.return_only_on_submit);
		if let Some(blank) = &behavior.blank_search_value {
			options = options.with_blank_search_value(blank.clone());
		}
		options
	}
}

/// How both comboboxes react to searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBehavior {
	pub debounce: Duration,
	pub rerun_on_update: bool,
	pub stop_on_update: bool,
	pub blank_search_value: Option<String>,
	pub return_only_on_submit: bool,
	pub clear_on_submit: bool,
}

impl Default for SearchBehavior {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			rerun_on_update: true,
			stop_on_update: false,
			blank_search_value: None,
			return_only_on_submit: false,
			clear_on_submit: false,
		}
	}
}

/// Text and behaviour of the explorer screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub from: ComboboxUiConfig,
	pub to: ComboboxUiConfig,
	pub button_label: String,
	pub search: SearchBehavior,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			from: ComboboxUiConfig::new("from_combobox", "From Location", "Your Current Location"),
			to: ComboboxUiConfig::new("to_combobox", "To Location", "Your Goal Destination"),
			button_label: DEFAULT_BUTTON_LABEL.to_string(),
			search: SearchBehavior::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn options_carry_labels_and_behaviour() {
		let behavior = SearchBehavior {
			blank_search_value: Some("Manila".into()),
			stop_on_update: true,
			..SearchBehavior::default()
		};
		let options: ComboboxOptions<String> = UiConfig::default().from.options(&behavior);

		assert_eq!(options.key, "from_combobox");
		assert_eq!(options.label.as_deref(), Some("From Location"));
		assert_eq!(options.placeholder, "Your Current Location");
		assert!(options.rerun_on_update);
		assert!(options.stop_on_update);
		assert_eq!(options.blank_search_value.as_deref(), Some("Manila"));
	}
}
