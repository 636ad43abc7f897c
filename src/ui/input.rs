//! Front-end state of a combobox: typed text, debounce timer and highlight.

use std::time::{Duration, Instant};

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line text input with a debounced search trigger.
pub struct ComboInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	pending_since: Option<Instant>,
	highlighted: usize,
	dropdown_open: bool,
}

impl<'a> ComboInput<'a> {
	pub fn new(placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		Self {
			textarea: build_textarea(&placeholder),
			placeholder,
			pending_since: None,
			highlighted: 0,
			dropdown_open: false,
		}
	}

	#[must_use]
	pub fn text(&self) -> String {
		self.textarea.lines().concat()
	}

	pub(crate) fn textarea(&self) -> &TextArea<'a> {
		&self.textarea
	}

	pub(crate) fn textarea_mut(&mut self) -> &mut TextArea<'a> {
		&mut self.textarea
	}

	/// Feed a key press to the text area. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent, now: Instant) -> bool {
		if !self.textarea.input(key) {
			return false;
		}
		self.pending_since = Some(now);
		self.dropdown_open = true;
		true
	}

	/// Whether typed text is waiting for the debounce interval.
	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending_since.is_some()
	}

	/// Hand out the typed text once it has been stable for `debounce`.
	pub fn take_due_search(&mut self, now: Instant, debounce: Duration) -> Option<String> {
		let since = self.pending_since?;
		if now.saturating_duration_since(since) < debounce {
			return None;
		}
		self.pending_since = None;
		Some(self.text())
	}

	/// Drop typed text and any pending search.
	pub fn clear(&mut self) {
		self.textarea = build_textarea(&self.placeholder);
		self.pending_since = None;
		self.highlighted = 0;
	}

	#[must_use]
	pub fn highlighted(&self) -> usize {
		self.highlighted
	}

	pub fn highlight_previous(&mut self) {
		self.highlighted = self.highlighted.saturating_sub(1);
	}

	pub fn highlight_next(&mut self, candidate_count: usize) {
		if self.highlighted + 1 < candidate_count {
			self.highlighted += 1;
		}
	}

	/// Keep the highlight inside a candidate list of `candidate_count` rows.
	pub fn clamp_highlight(&mut self, candidate_count: usize) {
		self.highlighted = self.highlighted.min(candidate_count.saturating_sub(1));
	}

	#[must_use]
	pub fn is_dropdown_open(&self) -> bool {
		self.dropdown_open
	}

	pub fn open_dropdown(&mut self) {
		self.dropdown_open = true;
	}

	pub fn close_dropdown(&mut self) {
		self.dropdown_open = false;
	}
}

fn build_textarea<'a>(placeholder: &str) -> TextArea<'a> {
	let mut textarea = TextArea::default();
	textarea.set_placeholder_text(placeholder);
	textarea.set_cursor_line_style(Style::default());
	textarea
}
