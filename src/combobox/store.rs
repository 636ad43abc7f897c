use std::collections::{HashMap, HashSet};

use super::ComboboxError;
use super::session::WidgetSession;

/// Sessions of every combobox rendered by a host, keyed by widget key.
#[derive(Debug)]
pub struct SessionStore<T> {
	sessions: HashMap<String, WidgetSession<T>>,
	registered: HashSet<String>,
}

impl<T> Default for SessionStore<T> {
	fn default() -> Self {
		Self {
			sessions: HashMap::new(),
			registered: HashSet::new(),
		}
	}
}

impl<T> SessionStore<T> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Reserve `key` for one widget. Keys must be non-empty and unique.
	pub fn register(&mut self, key: &str) -> Result<(), ComboboxError> {
		if key.trim().is_empty() {
			return Err(ComboboxError::EmptyKey);
		}
		if !self.registered.insert(key.to_string()) {
			return Err(ComboboxError::DuplicateKey {
				key: key.to_string(),
			});
		}
		Ok(())
	}

	#[must_use]
	pub fn contains(&self, key: &str) -> bool {
		self.sessions.contains_key(key)
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&WidgetSession<T>> {
		self.sessions.get(key)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut WidgetSession<T>> {
		self.sessions.get_mut(key)
	}

	pub(crate) fn insert(&mut self, key: &str, session: WidgetSession<T>) {
		self.sessions.insert(key.to_string(), session);
	}

	/// Drop the session for `key`; the widget re-creates it on next access.
	pub fn discard(&mut self, key: &str) -> Option<WidgetSession<T>> {
		self.sessions.remove(key)
	}

	/// Drop every session while keeping key registrations.
	pub fn clear(&mut self) {
		self.sessions.clear();
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.sessions.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.sessions.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn duplicate_keys_are_rejected() {
		let mut store = SessionStore::<String>::new();
		store.register("from_combobox").unwrap();

		let err = store.register("from_combobox").unwrap_err();
		assert_eq!(
			err,
			ComboboxError::DuplicateKey {
				key: "from_combobox".into()
			}
		);
		assert_eq!(err.to_string(), "combobox key 'from_combobox' is already registered");
	}

	#[test]
	fn blank_keys_are_rejected() {
		let mut store = SessionStore::<String>::new();
		assert_eq!(store.register("  "), Err(ComboboxError::EmptyKey));
	}

	#[test]
	fn discard_removes_only_the_session() {
		let mut store = SessionStore::<i32>::new();
		store.register("to_combobox").unwrap();
		store.insert("to_combobox", WidgetSession::seeded(None, &[]));
		assert_eq!(store.len(), 1);

		assert!(store.discard("to_combobox").is_some());
		assert!(store.is_empty());
		assert!(store.register("to_combobox").is_err());
	}
}
