//! One evaluation pass over the explorer screen.

use log::{trace, warn};

use crate::combobox::{ComboEvent, Selection, Signal};
use crate::map::MapError;
use crate::ui::App;
use crate::ui::directions::{RouteStatus, plan_route};
use crate::ui::state::Slot;

/// Consecutive restarts tolerated before a cycle is abandoned.
pub(crate) const MAX_RESTARTS: usize = 16;

/// What started a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
	/// Re-evaluate without a new interaction.
	Idle,
	/// A front-end event for one picker.
	Widget(Slot, ComboEvent),
	/// The "Get Instructions" button.
	Button,
}

impl Trigger {
	fn event_for(&self, slot: Slot) -> Option<ComboEvent> {
		match self {
			Self::Widget(target, event) if *target == slot => Some(event.clone()),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleEnd {
	Completed,
	Restarted,
	Halted,
}

impl<'a> App<'a> {
	/// Evaluate both pickers top-down, restarting from the top on request.
	pub(crate) fn dispatch(&mut self, trigger: Trigger) {
		let mut trigger = trigger;
		for attempt in 0..=MAX_RESTARTS {
			match self.evaluate(&trigger) {
				CycleEnd::Restarted => {
					trace!("cycle restart #{}", attempt + 1);
					trigger = Trigger::Idle;
				}
				CycleEnd::Completed | CycleEnd::Halted => {
					self.finish_cycle();
					return;
				}
			}
		}
		warn!("cycle restarted {MAX_RESTARTS} times in a row; abandoning it");
		self.finish_cycle();
	}

	fn evaluate(&mut self, trigger: &Trigger) -> CycleEnd {
		for slot in Slot::ALL {
			let combobox = match slot {
				Slot::From => &self.from,
				Slot::To => &self.to,
			};
			let event = trigger.event_for(slot);
			let resetting = event == Some(ComboEvent::Reset);
			if resetting {
				let default = combobox.options().default.clone().map(Selection::Value);
				self.outputs.set(slot, default);
			}
			match combobox.run(&mut self.store, event) {
				// Submit-only pickers report once; the host keeps the value until reset.
				Signal::Continue(None) if combobox.options().return_only_on_submit && !resetting => {}
				Signal::Continue(value) => self.outputs.set(slot, value),
				Signal::Restart => return CycleEnd::Restarted,
				Signal::Halt => {
					trace!("cycle halted after {slot:?}");
					return CycleEnd::Halted;
				}
			}
		}

		if *trigger == Trigger::Button {
			self.request_directions();
		}
		CycleEnd::Completed
	}

	fn request_directions(&mut self) {
		let (Some(from), Some(to)) = (
			self.committed_location(Slot::From).map(str::to_string),
			self.committed_location(Slot::To).map(str::to_string),
		) else {
			self.notices
				.borrow_mut()
				.warn("Select both a from and a to location.");
			return;
		};

		match plan_route(self.directions.as_ref(), &mut self.map, &from, &to) {
			RouteStatus::Plotted(trip) => {
				self.notices.borrow_mut().info(format!(
					"{} maneuvers from {} to {}",
					trip.maneuvers.len(),
					trip.from,
					trip.to
				));
				self.trip = Some(trip);
			}
			RouteStatus::NoRoute => {
				self.drop_route();
				self.notices
					.borrow_mut()
					.warn(MapError::NoMarkers.to_string());
			}
			RouteStatus::Failed(reason) => {
				self.drop_route();
				self.notices
					.borrow_mut()
					.warn(format!("Directions request failed: {reason}"));
			}
		}
	}

	fn drop_route(&mut self) {
		self.map.clear();
		self.trip = None;
	}

	fn finish_cycle(&mut self) {
		if self.route_stale.replace(false) {
			self.drop_route();
		}
		for slot in Slot::ALL {
			let count = self.candidate_count(slot);
			self.input_mut(slot).clamp_highlight(count);
		}
	}
}
