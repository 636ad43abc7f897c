//! User-visible warnings shown in the status row.

use std::cell::RefCell;
use std::rc::Rc;

use crate::provider::{ProviderResult, SearchHit, SearchProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
	Info,
	Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub level: NoticeLevel,
	pub message: String,
}

/// Latest message for the status row. Newer messages replace older ones.
#[derive(Debug, Default)]
pub struct Notices {
	current: Option<Notice>,
}

impl Notices {
	pub fn info(&mut self, message: impl Into<String>) {
		self.push(NoticeLevel::Info, message.into());
	}

	pub fn warn(&mut self, message: impl Into<String>) {
		self.push(NoticeLevel::Warning, message.into());
	}

	fn push(&mut self, level: NoticeLevel, message: String) {
		self.current = Some(Notice { level, message });
	}

	#[must_use]
	pub fn current(&self) -> Option<&Notice> {
		self.current.as_ref()
	}

	pub fn clear(&mut self) {
		self.current = None;
	}
}

pub(crate) type SharedNotices = Rc<RefCell<Notices>>;

/// Search provider that turns failures into status-row warnings before the
/// combobox swallows them.
pub(crate) struct ReportingProvider {
	inner: Rc<dyn SearchProvider<String>>,
	notices: SharedNotices,
}

impl ReportingProvider {
	pub(crate) fn new(inner: Rc<dyn SearchProvider<String>>, notices: SharedNotices) -> Self {
		Self { inner, notices }
	}
}

impl SearchProvider<String> for ReportingProvider {
	fn search(&self, text: &str) -> ProviderResult<Option<Vec<SearchHit<String>>>> {
		self.inner.search(text).inspect_err(|err| {
			self.notices.borrow_mut().warn(err.to_string());
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::provider::{ProviderError, from_fn};

	#[test]
	fn failures_are_reported_and_passed_through() {
		let notices = SharedNotices::default();
		let inner: Rc<dyn SearchProvider<String>> = Rc::new(from_fn(
			|_text: &str| -> ProviderResult<Option<Vec<SearchHit<String>>>> {
				Err(ProviderError::NoLocations)
			},
		));
		let provider = ReportingProvider::new(inner, Rc::clone(&notices));

		assert!(provider.search("Vigan").is_err());
		let notices = notices.borrow();
		let notice = notices.current().expect("warning");
		assert_eq!(notice.level, NoticeLevel::Warning);
		assert_eq!(notice.message, "No Locations Found.");
	}

	#[test]
	fn newer_notices_replace_older_ones() {
		let mut notices = Notices::default();
		notices.warn("first");
		notices.info("second");
		assert_eq!(notices.current().map(|n| n.message.as_str()), Some("second"));
		notices.clear();
		assert!(notices.current().is_none());
	}
}
