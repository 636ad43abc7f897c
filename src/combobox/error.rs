use thiserror::Error;

/// Errors raised while wiring comboboxes into a [`SessionStore`](super::SessionStore).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComboboxError {
	/// Every combobox needs a key to find its session again.
	#[error("combobox key must not be empty")]
	EmptyKey,

	/// Two comboboxes attempted to share one session key.
	#[error("combobox key '{key}' is already registered")]
	DuplicateKey { key: String },
}
