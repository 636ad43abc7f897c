use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::runtime::Trigger;
use super::state::{ExploreOutcome, Focus, Slot};
use crate::combobox::ComboEvent;

impl<'a> App<'a> {
	/// Apply one key press. Returns the outcome once the user quits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<ExploreOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('c') | KeyCode::Char('q') => return Some(self.outcome()),
				KeyCode::Char('g') => {
					self.dispatch(Trigger::Button);
					return None;
				}
				_ => {}
			}
		}

		match key.code {
			KeyCode::Tab => self.move_focus(self.focus.next()),
			KeyCode::BackTab => self.move_focus(self.focus.previous()),
			KeyCode::Esc => self.reset_focused(),
			KeyCode::Enter => self.activate_focused(),
			KeyCode::Up => {
				if let Some(slot) = self.focus.slot() {
					self.input_mut(slot).highlight_previous();
				}
			}
			KeyCode::Down => {
				if let Some(slot) = self.focus.slot() {
					let count = self.candidate_count(slot);
					let input = self.input_mut(slot);
					if input.is_dropdown_open() {
						input.highlight_next(count);
					} else {
						input.open_dropdown();
					}
				}
			}
			_ => {
				if let Some(slot) = self.focus.slot() {
					self.input_mut(slot).input(key, Instant::now());
				}
			}
		}
		None
	}

	/// Dispatch searches whose debounce interval elapsed by `now`.
	pub fn tick(&mut self, now: Instant) {
		let debounce = self.config.search.debounce;
		for slot in Slot::ALL {
			if let Some(text) = self.input_mut(slot).take_due_search(now, debounce) {
				self.dispatch(Trigger::Widget(slot, ComboEvent::Search(text)));
			}
		}
	}

	pub(crate) fn has_pending_search(&self) -> bool {
		Slot::ALL.iter().any(|slot| self.input(*slot).is_pending())
	}

	fn move_focus(&mut self, focus: Focus) {
		if let Some(slot) = self.focus.slot() {
			self.input_mut(slot).close_dropdown();
		}
		self.focus = focus;
	}

	fn reset_focused(&mut self) {
		let Some(slot) = self.focus.slot() else {
			return;
		};
		let input = self.input_mut(slot);
		input.clear();
		input.close_dropdown();
		self.notices.borrow_mut().clear();
		self.dispatch(Trigger::Widget(slot, ComboEvent::Reset));
	}

	fn activate_focused(&mut self) {
		let Some(slot) = self.focus.slot() else {
			self.dispatch(Trigger::Button);
			return;
		};

		let input = self.input(slot);
		if !input.is_dropdown_open() || self.candidate_count(slot) == 0 {
			return;
		}
		let index = input.highlighted();
		self.dispatch(Trigger::Widget(slot, ComboEvent::Submit(index)));

		let clear = self.combobox(slot).options().clear_on_submit;
		let input = self.input_mut(slot);
		if clear {
			input.clear();
		}
		input.close_dropdown();
	}
}
