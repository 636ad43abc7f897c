use std::fmt;

use log::{debug, trace, warn};

use super::options::ComboboxOptions;
use super::session::{Selection, WidgetSession};
use super::store::SessionStore;
use crate::provider::SearchProvider;

/// Interaction reported by the combobox front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboEvent {
	/// The user typed `text` and the debounce interval elapsed.
	Search(String),
	/// The user picked the candidate at this position.
	Submit(usize),
	/// The user cleared the widget.
	Reset,
}

/// What the host must do after a combobox ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal<T> {
	/// Keep evaluating the UI; the widget currently reports this value.
	Continue(Option<Selection<T>>),
	/// Discard the current cycle and evaluate the UI again from the top.
	Restart,
	/// End the current cycle without producing further output.
	Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchOrigin {
	/// Automatic blank search issued when a session is created or reset.
	Seed,
	User,
}

/// A searchable combobox bound to one session key.
///
/// The widget itself is stateless; everything that survives between cycles
/// lives in the [`SessionStore`] handed to [`Combobox::run`].
pub struct Combobox<T, P> {
	options: ComboboxOptions<T>,
	provider: P,
	on_reset: Option<Box<dyn Fn()>>,
}

impl<T, P> fmt::Debug for Combobox<T, P>
where
	T: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Combobox")
			.field("options", &self.options)
			.field("on_reset", &self.on_reset.is_some())
			.finish_non_exhaustive()
	}
}

impl<T, P> Combobox<T, P>
where
	T: Clone + fmt::Display,
	P: SearchProvider<T>,
{
	pub fn new(options: ComboboxOptions<T>, provider: P) -> Self {
		Self {
			options,
			provider,
			on_reset: None,
		}
	}

	/// Invoke `callback` after every reset.
	#[must_use]
	pub fn with_reset_callback(mut self, callback: impl Fn() + 'static) -> Self {
		self.on_reset = Some(Box::new(callback));
		self
	}

	#[must_use]
	pub fn key(&self) -> &str {
		&self.options.key
	}

	#[must_use]
	pub fn options(&self) -> &ComboboxOptions<T> {
		&self.options
	}

	/// Mount the widget, then process `event`.
	pub fn run(&self, store: &mut SessionStore<T>, event: Option<ComboEvent>) -> Signal<T> {
		if let Some(signal) = self.mount(store) {
			return signal;
		}
		self.handle_event(store, event)
	}

	/// Create the session on first access, running the blank search seed.
	///
	/// Returns a signal only when the seed search asked for one.
	pub fn mount(&self, store: &mut SessionStore<T>) -> Option<Signal<T>> {
		if store.contains(self.key()) {
			return None;
		}
		debug!("creating combobox session '{}'", self.key());
		self.install_fresh_session(store);
		self.seed(store)
	}

	/// Process one front-end event against an already mounted session.
	pub fn handle_event(&self, store: &mut SessionStore<T>, event: Option<ComboEvent>) -> Signal<T> {
		if !store.contains(self.key()) {
			return self.inactive();
		}

		match event {
			None => self.steady(store),
			Some(ComboEvent::Search(text)) => self
				.process_search(store, &text, SearchOrigin::User)
				.unwrap_or_else(|| self.steady(store)),
			Some(ComboEvent::Submit(index)) => self.submit(store, index),
			Some(ComboEvent::Reset) => self.reset(store),
		}
	}

	fn install_fresh_session(&self, store: &mut SessionStore<T>) {
		let session =
			WidgetSession::seeded(self.options.default.clone(), &self.options.default_candidates);
		store.insert(self.key(), session);
	}

	fn seed(&self, store: &mut SessionStore<T>) -> Option<Signal<T>> {
		let blank = self.options.blank_search_value.as_deref()?;
		self.process_search(store, blank, SearchOrigin::Seed)
	}

	fn process_search(
		&self,
		store: &mut SessionStore<T>,
		text: &str,
		origin: SearchOrigin,
	) -> Option<Signal<T>> {
		let Some(session) = store.get_mut(self.key()) else {
			return Some(self.inactive());
		};

		if session.last_query() == text {
			trace!("combobox '{}' reusing results for '{text}'", self.key());
			return None;
		}

		session.record_query(text);
		let hits = match self.provider.search(text) {
			Ok(Some(hits)) => hits,
			Ok(None) => Vec::new(),
			Err(err) => {
				warn!("combobox '{}' search for '{text}' failed: {err}", self.key());
				Vec::new()
			}
		};
		let previous = session.replace_candidates(hits);
		let current = session.candidate_count();
		debug!(
			"combobox '{}' search '{text}' produced {current} candidates (previously {previous})",
			self.key()
		);

		// An empty seed following an empty set would restart forever.
		let empty_seed = origin == SearchOrigin::Seed && previous == 0 && current == 0;
		if self.options.rerun_on_update && !empty_seed {
			return Some(Signal::Restart);
		}
		if self.options.stop_on_update {
			return Some(Signal::Halt);
		}
		None
	}

	fn submit(&self, store: &mut SessionStore<T>, index: usize) -> Signal<T> {
		let Some(session) = store.get_mut(self.key()) else {
			return self.inactive();
		};
		if !session.commit(index) {
			debug!(
				"combobox '{}' ignored submit of index {index} outside {} candidates",
				self.key(),
				session.candidate_count()
			);
		}
		Signal::Continue(session.committed().cloned())
	}

	fn reset(&self, store: &mut SessionStore<T>) -> Signal<T> {
		debug!("resetting combobox session '{}'", self.key());
		self.install_fresh_session(store);
		let seeded = self.seed(store);
		if let Some(callback) = &self.on_reset {
			callback();
		}
		seeded.unwrap_or_else(|| Signal::Continue(self.options.default.clone().map(Selection::Value)))
	}

	fn steady(&self, store: &SessionStore<T>) -> Signal<T> {
		if self.options.return_only_on_submit {
			return Signal::Continue(None);
		}
		match store.get(self.key()) {
			Some(session) => Signal::Continue(session.committed().cloned()),
			None => self.inactive(),
		}
	}

	fn inactive(&self) -> Signal<T> {
		debug!("session unavailable for combobox '{}'", self.key());
		Signal::Continue(None)
	}
}
