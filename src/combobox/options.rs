use crate::provider::SearchHit;

pub const DEFAULT_PLACEHOLDER: &str = "Search ...";

/// Static configuration of a single combobox.
#[derive(Debug, Clone)]
pub struct ComboboxOptions<T> {
	/// Session key; must be unique within a [`SessionStore`](super::SessionStore).
	pub key: String,
	/// Label shown above the input.
	pub label: Option<String>,
	/// Hint shown inside the empty input.
	pub placeholder: String,
	/// Committed value before anything was submitted and after a reset.
	pub default: Option<T>,
	/// Candidates offered before the first search.
	pub default_candidates: Vec<SearchHit<T>>,
	/// Clear the typed text once a candidate is submitted.
	pub clear_on_submit: bool,
	/// Ask the host to re-evaluate the whole UI after each fresh search.
	pub rerun_on_update: bool,
	/// Ask the host to stop the current cycle after each fresh search.
	pub stop_on_update: bool,
	/// Query issued automatically when the widget is created or reset.
	pub blank_search_value: Option<String>,
	/// Report nothing unless the current event is a submit.
	pub return_only_on_submit: bool,
}

impl<T> ComboboxOptions<T> {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: None,
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			default: None,
			default_candidates: Vec::new(),
			clear_on_submit: false,
			rerun_on_update: false,
			stop_on_update: false,
			blank_search_value: None,
			return_only_on_submit: false,
		}
	}

	#[must_use]
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_default(mut self, default: T) -> Self {
		self.default = Some(default);
		self
	}

	#[must_use]
	pub fn with_default_candidates(mut self, candidates: Vec<SearchHit<T>>) -> Self {
		self.default_candidates = candidates;
		self
	}

	#[must_use]
	pub fn with_blank_search_value(mut self, value: impl Into<String>) -> Self {
		self.blank_search_value = Some(value.into());
		self
	}

	#[must_use]
	pub fn clear_on_submit(mut self, enabled: bool) -> Self {
		self.clear_on_submit = enabled;
		self
	}

	#[must_use]
	pub fn rerun_on_update(mut self, enabled: bool) -> Self {
		self.rerun_on_update = enabled;
		self
	}

	#[must_use]
	pub fn stop_on_update(mut self, enabled: bool) -> Self {
		self.stop_on_update = enabled;
		self
	}

	#[must_use]
	pub fn return_only_on_submit(mut self, enabled: bool) -> Self {
		self.return_only_on_submit = enabled;
		self
	}
}
