//! Searchable combobox state machine.
//!
//! A [`Combobox`] mediates between a free-text input and a committed
//! selection. Each UI cycle the host calls [`Combobox::run`] with the latest
//! front-end interaction (if any) and interprets the returned [`Signal`]:
//! continue with the reported value, restart the cycle, or halt it. Search
//! results are cached per session so repeated queries never reach the
//! [`SearchProvider`](crate::provider::SearchProvider) twice in a row.

mod error;
mod machine;
mod options;
mod session;
mod store;

pub use error::ComboboxError;
pub use machine::{ComboEvent, Combobox, Signal};
pub use options::{ComboboxOptions, DEFAULT_PLACEHOLDER};
pub use session::{Candidate, Selection, WidgetSession};
pub use store::SessionStore;

#[cfg(test)]
mod tests;
