//! Interactive terminal front-end of the explorer.
//!
//! [`App`] owns the two location pickers and their [`SessionStore`]. Key
//! presses are translated into combobox events in [`actions`]; every event
//! starts a cycle that evaluates both pickers top-down and interprets their
//! signals. The remaining submodules draw the screen and style it.
//!
//! [`SessionStore`]: crate::combobox::SessionStore

mod actions;
pub mod components;
mod config;
pub mod directions;
pub mod input;
mod notices;
mod render;
mod runtime;
mod state;
pub mod style;

pub use config::{
	ComboboxUiConfig, DEFAULT_BUTTON_LABEL, DEFAULT_DEBOUNCE, DEFAULT_TITLE, SearchBehavior,
	UiConfig,
};
pub use directions::{RouteStatus, Trip, plan_route};
pub use notices::{Notice, NoticeLevel};
pub use runtime::run;
pub use state::{App, ExploreOutcome, Focus, Outputs, Slot};
