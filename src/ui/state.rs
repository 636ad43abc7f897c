use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use crate::combobox::{Combobox, ComboboxError, Selection, SessionStore, WidgetSession};
use crate::map::MapView;
use crate::provider::{DirectionsProvider, SearchProvider};

use super::config::UiConfig;
use super::directions::Trip;
use super::input::ComboInput;
use super::notices::{Notice, Notices, ReportingProvider, SharedNotices};
use super::style::Theme;

pub(crate) type LocationCombobox = Combobox<String, ReportingProvider>;

/// One of the two location pickers, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
	From,
	To,
}

impl Slot {
	pub const ALL: [Slot; 2] = [Slot::From, Slot::To];
}

/// Widget receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	From,
	To,
	Button,
}

impl Focus {
	#[must_use]
	pub fn next(self) -> Self {
		match self {
			Self::From => Self::To,
			Self::To => Self::Button,
			Self::Button => Self::From,
		}
	}

	#[must_use]
	pub fn previous(self) -> Self {
		match self {
			Self::From => Self::Button,
			Self::To => Self::From,
			Self::Button => Self::To,
		}
	}

	#[must_use]
	pub fn slot(self) -> Option<Slot> {
		match self {
			Self::From => Some(Slot::From),
			Self::To => Some(Slot::To),
			Self::Button => None,
		}
	}
}

/// Values reported by the comboboxes during the last completed cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outputs {
	pub from: Option<Selection<String>>,
	pub to: Option<Selection<String>>,
}

impl Outputs {
	#[must_use]
	pub fn get(&self, slot: Slot) -> Option<&Selection<String>> {
		match slot {
			Slot::From => self.from.as_ref(),
			Slot::To => self.to.as_ref(),
		}
	}

	pub(crate) fn set(&mut self, slot: Slot, value: Option<Selection<String>>) {
		match slot {
			Slot::From => self.from = value,
			Slot::To => self.to = value,
		}
	}
}

/// What the explorer leaves behind when the user quits.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExploreOutcome {
	pub from: Option<String>,
	pub to: Option<String>,
	pub trip: Option<Trip>,
}

/// Application state shared between the event loop and renderer.
pub struct App<'a> {
	pub(crate) config: UiConfig,
	pub(crate) theme: Theme,
	pub(crate) store: SessionStore<String>,
	pub(crate) from: LocationCombobox,
	pub(crate) to: LocationCombobox,
	pub(crate) from_input: ComboInput<'a>,
	pub(crate) to_input: ComboInput<'a>,
	pub(crate) focus: Focus,
	pub(crate) outputs: Outputs,
	pub(crate) directions: Rc<dyn DirectionsProvider>,
	pub(crate) map: MapView,
	pub(crate) trip: Option<Trip>,
	pub(crate) notices: SharedNotices,
	/// Raised by the reset callbacks; the drawn route is dropped after the cycle.
	pub(crate) route_stale: Rc<Cell<bool>>,
	pub(crate) throbber_state: ThrobberState,
}

impl<'a> App<'a> {
	/// Register both picker sessions and run the first cycle.
	pub fn new(
		config: UiConfig,
		search: Rc<dyn SearchProvider<String>>,
		directions: Rc<dyn DirectionsProvider>,
	) -> Result<Self, ComboboxError> {
		let mut store = SessionStore::new();
		let notices: SharedNotices = Rc::new(RefCell::new(Notices::default()));
		let route_stale = Rc::new(Cell::new(false));

		let from = build_combobox(&config, Slot::From, &search, &notices, &route_stale);
		let to = build_combobox(&config, Slot::To, &search, &notices, &route_stale);
		store.register(from.key())?;
		store.register(to.key())?;

		let mut app = Self {
			from_input: ComboInput::new(from.options().placeholder.clone()),
			to_input: ComboInput::new(to.options().placeholder.clone()),
			config,
			theme: Theme::default(),
			store,
			from,
			to,
			focus: Focus::default(),
			outputs: Outputs::default(),
			directions,
			map: MapView::new(),
			trip: None,
			notices,
			route_stale,
			throbber_state: ThrobberState::default(),
		};
		app.dispatch(super::runtime::Trigger::Idle);
		Ok(app)
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn config(&self) -> &UiConfig {
		&self.config
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
	}

	#[must_use]
	pub fn outputs(&self) -> &Outputs {
		&self.outputs
	}

	#[must_use]
	pub fn trip(&self) -> Option<&Trip> {
		self.trip.as_ref()
	}

	#[must_use]
	pub fn map(&self) -> &MapView {
		&self.map
	}

	#[must_use]
	pub fn notice(&self) -> Option<Notice> {
		self.notices.borrow().current().cloned()
	}

	#[must_use]
	pub fn session(&self, slot: Slot) -> Option<&WidgetSession<String>> {
		self.store.get(self.combobox(slot).key())
	}

	#[must_use]
	pub fn input(&self, slot: Slot) -> &ComboInput<'a> {
		match slot {
			Slot::From => &self.from_input,
			Slot::To => &self.to_input,
		}
	}

	pub(crate) fn input_mut(&mut self, slot: Slot) -> &mut ComboInput<'a> {
		match slot {
			Slot::From => &mut self.from_input,
			Slot::To => &mut self.to_input,
		}
	}

	pub(crate) fn combobox(&self, slot: Slot) -> &LocationCombobox {
		match slot {
			Slot::From => &self.from,
			Slot::To => &self.to,
		}
	}

	pub(crate) fn candidate_count(&self, slot: Slot) -> usize {
		self.session(slot)
			.map_or(0, WidgetSession::candidate_count)
	}

	/// Committed location text of a picker, if it holds a candidate value.
	#[must_use]
	pub fn committed_location(&self, slot: Slot) -> Option<&str> {
		self.outputs
			.get(slot)
			.and_then(Selection::value)
			.map(String::as_str)
	}

	#[must_use]
	pub fn outcome(&self) -> ExploreOutcome {
		ExploreOutcome {
			from: self.committed_location(Slot::From).map(str::to_string),
			to: self.committed_location(Slot::To).map(str::to_string),
			trip: self.trip.clone(),
		}
	}
}

fn build_combobox(
	config: &UiConfig,
	slot: Slot,
	search: &Rc<dyn SearchProvider<String>>,
	notices: &SharedNotices,
	route_stale: &Rc<Cell<bool>>,
) -> LocationCombobox {
	let picker = match slot {
		Slot::From => &config.from,
		Slot::To => &config.to,
	};
	let provider = ReportingProvider::new(Rc::clone(search), Rc::clone(notices));
	let stale = Rc::clone(route_stale);
	let key = picker.key.clone();
	Combobox::new(picker.options(&config.search), provider).with_reset_callback(move || {
		debug!("'{key}' was reset; dropping the drawn route");
		stale.set(true);
	})
}
