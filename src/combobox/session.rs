use std::fmt;

use crate::provider::SearchHit;

/// One suggestion offered by a combobox.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
	pub label: String,
	pub value: T,
}

impl<T: fmt::Display> From<SearchHit<T>> for Candidate<T> {
	fn from(hit: SearchHit<T>) -> Self {
		let (label, value) = hit.into_parts();
		Self { label, value }
	}
}

/// The value a combobox reports as committed.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
	/// A candidate value or the configured default.
	Value(T),
	/// A submit that arrived before any candidate set existed for the widget.
	Index(usize),
}

impl<T> Selection<T> {
	#[must_use]
	pub fn value(&self) -> Option<&T> {
		match self {
			Self::Value(value) => Some(value),
			Self::Index(_) => None,
		}
	}

	#[must_use]
	pub fn into_value(self) -> Option<T> {
		match self {
			Self::Value(value) => Some(value),
			Self::Index(_) => None,
		}
	}
}

/// Per-widget state kept between UI cycles.
#[derive(Debug, Clone)]
pub struct WidgetSession<T> {
	committed: Option<Selection<T>>,
	last_query: String,
	/// `None` until a candidate set was populated, either from defaults or a search.
	candidates: Option<Vec<Candidate<T>>>,
}

impl<T> WidgetSession<T> {
	/// Fresh session holding `default` and, when non-empty, the default candidates.
	pub(crate) fn seeded(default: Option<T>, default_candidates: &[SearchHit<T>]) -> Self
	where
		T: Clone + fmt::Display,
	{
		let candidates = if default_candidates.is_empty() {
			None
		} else {
			Some(
				default_candidates
					.iter()
					.cloned()
					.map(Candidate::from)
					.collect(),
			)
		};

		Self {
			committed: default.map(Selection::Value),
			last_query: String::new(),
			candidates,
		}
	}

	#[must_use]
	pub fn committed(&self) -> Option<&Selection<T>> {
		self.committed.as_ref()
	}

	#[must_use]
	pub fn last_query(&self) -> &str {
		&self.last_query
	}

	#[must_use]
	pub fn candidates(&self) -> &[Candidate<T>] {
		self.candidates.as_deref().unwrap_or_default()
	}

	pub fn candidate_labels(&self) -> impl Iterator<Item = &str> {
		self.candidates().iter().map(|candidate| candidate.label.as_str())
	}

	pub fn candidate_values(&self) -> impl Iterator<Item = &T> {
		self.candidates().iter().map(|candidate| &candidate.value)
	}

	#[must_use]
	pub fn candidate_count(&self) -> usize {
		self.candidates().len()
	}

	/// Whether a candidate set was ever populated for this session.
	#[must_use]
	pub fn has_candidate_set(&self) -> bool {
		self.candidates.is_some()
	}

	pub(crate) fn record_query(&mut self, text: &str) {
		self.last_query.clear();
		self.last_query.push_str(text);
	}

	/// Replace the candidate set, returning how many candidates it held before.
	pub(crate) fn replace_candidates(&mut self, hits: Vec<SearchHit<T>>) -> usize
	where
		T: fmt::Display,
	{
		let previous = self.candidate_count();
		self.candidates = Some(hits.into_iter().map(Candidate::from).collect());
		previous
	}

	/// Commit the candidate at `index`.
	///
	/// Without a candidate set the index itself is committed. An index outside
	/// a populated set leaves the committed value untouched and returns `false`.
	pub(crate) fn commit(&mut self, index: usize) -> bool
	where
		T: Clone,
	{
		let selection = match &self.candidates {
			None => Selection::Index(index),
			Some(candidates) => match candidates.get(index) {
				Some(candidate) => Selection::Value(candidate.value.clone()),
				None => return false,
			},
		};
		self.committed = Some(selection);
		true
	}
}
