//! Core crate exports for the `mqx` route explorer.
//!
//! The [`combobox`] module holds the searchable combobox state machine; the
//! [`provider`] and [`map`] modules define its collaborators, and [`ui`] wires
//! everything into the terminal application. The root re-exports what an
//! embedder needs to run the explorer with its own providers.

pub mod app_dirs;
pub mod combobox;
pub mod logging;
pub mod map;
pub mod provider;
pub mod ui;

pub use combobox::{
	ComboEvent, Combobox, ComboboxError, ComboboxOptions, Selection, SessionStore, Signal,
	WidgetSession,
};
pub use map::{MapError, MapRenderer, MapView, Marker};
pub use provider::{DirectionsProvider, ProviderError, SearchHit, SearchProvider};
pub use ui::{
	App, ComboboxUiConfig, ExploreOutcome, SearchBehavior, Trip, UiConfig, run,
};
