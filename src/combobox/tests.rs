use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::provider::{ProviderError, ProviderResult, SearchHit, SearchProvider, from_fn};

/// Provider answering from a fixed table and counting calls.
struct Recorded {
	calls: Rc<RefCell<Vec<String>>>,
}

impl Recorded {
	fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
		let calls = Rc::new(RefCell::new(Vec::new()));
		(
			Self {
				calls: Rc::clone(&calls),
			},
			calls,
		)
	}
}

impl SearchProvider<i32> for Recorded {
	fn search(&self, text: &str) -> ProviderResult<Option<Vec<SearchHit<i32>>>> {
		self.calls.borrow_mut().push(text.to_string());
		Ok(match text {
			"Man" => Some(vec![
				SearchHit::labeled("Manila, NCR", 1),
				SearchHit::labeled("Quezon City, NCR", 2),
			]),
			"Ceb" => Some(vec![SearchHit::labeled("Cebu City, Cebu", 3)]),
			"" => Some(vec![SearchHit::Bare(9)]),
			_ => None,
		})
	}
}

fn mounted<P: SearchProvider<i32>>(
	options: ComboboxOptions<i32>,
	provider: P,
) -> (Combobox<i32, P>, SessionStore<i32>) {
	let combobox = Combobox::new(options, provider);
	let mut store = SessionStore::new();
	store.register(combobox.key()).unwrap();
	assert_eq!(combobox.mount(&mut store), None);
	(combobox, store)
}

fn search(text: &str) -> Option<ComboEvent> {
	Some(ComboEvent::Search(text.to_string()))
}

#[test]
fn repeated_search_text_hits_the_cache() {
	let (provider, calls) = Recorded::new();
	let (combobox, mut store) = mounted(ComboboxOptions::new("from"), provider);

	combobox.run(&mut store, search("Man"));
	combobox.run(&mut store, search("Man"));

	assert_eq!(*calls.borrow(), vec!["Man"]);
}

#[test]
fn search_populates_aligned_labels_and_values() {
	let (provider, _) = Recorded::new();
	let (combobox, mut store) = mounted(ComboboxOptions::new("from"), provider);

	let signal = combobox.run(&mut store, search("Man"));
	assert_eq!(signal, Signal::Continue(None));

	let session = store.get("from").unwrap();
	assert_eq!(
		session.candidate_labels().collect::<Vec<_>>(),
		vec!["Manila, NCR", "Quezon City, NCR"]
	);
	assert_eq!(session.candidate_values().copied().collect::<Vec<_>>(), vec![1, 2]);
	assert_eq!(session.last_query(), "Man");

	let signal = combobox.run(&mut store, Some(ComboEvent::Submit(0)));
	assert_eq!(signal, Signal::Continue(Some(Selection::Value(1))));
}

#[test]
fn committed_value_survives_later_searches() {
	let (provider, _) = Recorded::new();
	let (combobox, mut store) = mounted(ComboboxOptions::new("from"), provider);

	combobox.run(&mut store, search("Man"));
	combobox.run(&mut store, Some(ComboEvent::Submit(1)));
	let after_search = combobox.run(&mut store, search("Ceb"));
	let idle = combobox.run(&mut store, None);

	assert_eq!(after_search, Signal::Continue(Some(Selection::Value(2))));
	assert_eq!(idle, Signal::Continue(Some(Selection::Value(2))));
	assert_eq!(store.get("from").unwrap().candidate_count(), 1);
}

#[test]
fn reset_restores_the_default_and_fires_the_callback() {
	let (provider, _) = Recorded::new();
	let resets = Rc::new(Cell::new(0));
	let counter = Rc::clone(&resets);
	let combobox = Combobox::new(ComboboxOptions::new("to").with_default(42), provider)
		.with_reset_callback(move || counter.set(counter.get() + 1));
	let mut store = SessionStore::new();

	combobox.run(&mut store, search("Man"));
	combobox.run(&mut store, Some(ComboEvent::Submit(0)));
	let signal = combobox.run(&mut store, Some(ComboEvent::Reset));

	assert_eq!(signal, Signal::Continue(Some(Selection::Value(42))));
	assert_eq!(resets.get(), 1);
	let session = store.get("to").unwrap();
	assert_eq!(session.candidate_count(), 0);
	assert_eq!(session.last_query(), "");
	assert_eq!(session.committed(), Some(&Selection::Value(42)));
}

#[test]
fn null_results_do_not_loop_with_an_empty_blank_seed() {
	let calls = Rc::new(Cell::new(0));
	let counter = Rc::clone(&calls);
	let provider = from_fn(move |_text: &str| -> ProviderResult<Option<Vec<SearchHit<i32>>>> {
		counter.set(counter.get() + 1);
		Ok(None)
	});
	let options = ComboboxOptions::new("from")
		.rerun_on_update(true)
		.with_blank_search_value("zzz");
	let combobox = Combobox::new(options, provider);
	let mut store = SessionStore::new();

	// Seed search returns nothing after nothing: no restart.
	assert_eq!(combobox.mount(&mut store), None);
	assert_eq!(calls.get(), 1);
	assert_eq!(store.get("from").unwrap().candidate_count(), 0);

	assert_eq!(combobox.run(&mut store, search("zzz")), Signal::Continue(None));
	assert_eq!(calls.get(), 1);

	// Resetting re-seeds without looping either.
	assert_eq!(
		combobox.run(&mut store, Some(ComboEvent::Reset)),
		Signal::Continue(None)
	);
	assert_eq!(calls.get(), 2);

	// Ordinary searches still ask for a re-evaluation, even when empty.
	assert_eq!(combobox.run(&mut store, search("abc")), Signal::Restart);
	assert_eq!(combobox.run(&mut store, None), Signal::Continue(None));
	assert_eq!(calls.get(), 3);
}

#[test]
fn seed_with_results_restarts_once() {
	let (provider, calls) = Recorded::new();
	let options = ComboboxOptions::new("from")
		.rerun_on_update(true)
		.with_blank_search_value("");
	let combobox = Combobox::new(options, provider);
	let mut store = SessionStore::new();

	// Fresh sessions start with an empty last query, so the blank seed is a
	// cache hit and never reaches the provider.
	assert_eq!(combobox.run(&mut store, None), Signal::Continue(None));
	assert!(calls.borrow().is_empty());

	let options = ComboboxOptions::new("to")
		.rerun_on_update(true)
		.with_blank_search_value("Ceb");
	let (provider, calls) = Recorded::new();
	let combobox = Combobox::new(options, provider);
	assert_eq!(combobox.run(&mut store, None), Signal::Restart);
	assert_eq!(combobox.run(&mut store, None), Signal::Continue(None));
	assert_eq!(*calls.borrow(), vec!["Ceb"]);
}

#[test]
fn stop_on_update_halts_only_without_rerun() {
	let (provider, _) = Recorded::new();
	let (combobox, mut store) = mounted(ComboboxOptions::new("from").stop_on_update(true), provider);
	assert_eq!(combobox.run(&mut store, search("Man")), Signal::Halt);
	// Cache hit: nothing new, nothing to halt.
	assert_eq!(combobox.run(&mut store, search("Man")), Signal::Continue(None));

	let (provider, _) = Recorded::new();
	let options = ComboboxOptions::new("to")
		.stop_on_update(true)
		.rerun_on_update(true);
	let (combobox, mut store) = mounted(options, provider);
	assert_eq!(combobox.run(&mut store, search("Man")), Signal::Restart);
}

#[test]
fn provider_failures_become_empty_candidate_sets() {
	let provider = from_fn(|_text: &str| -> ProviderResult<Option<Vec<SearchHit<i32>>>> {
		Err(ProviderError::NoLocations)
	});
	let (combobox, mut store) = mounted(ComboboxOptions::new("from").with_default(5), provider);

	let signal = combobox.run(&mut store, search("Iloilo"));

	assert_eq!(signal, Signal::Continue(Some(Selection::Value(5))));
	let session = store.get("from").unwrap();
	assert!(session.has_candidate_set());
	assert_eq!(session.candidate_count(), 0);
}

#[test]
fn submit_before_any_candidates_commits_the_index() {
	let (provider, _) = Recorded::new();
	let (combobox, mut store) = mounted(ComboboxOptions::new("from"), provider);

	let signal = combobox.run(&mut store, Some(ComboEvent::Submit(3)));
	assert_eq!(signal, Signal::Continue(Some(Selection::Index(3))));
}

#[test]
fn default_candidates_can_be_submitted_without_searching() {
	let (provider, calls) = Recorded::new();
	let options = ComboboxOptions::new("from")
		.with_default_candidates(vec![SearchHit::labeled("Baguio, Benguet", 11)]);
	let (combobox, mut store) = mounted(options, provider);

	let signal = combobox.run(&mut store, Some(ComboEvent::Submit(0)));
	assert_eq!(signal, Signal::Continue(Some(Selection::Value(11))));
	assert!(calls.borrow().is_empty());
}

#[test]
fn return_only_on_submit_hides_the_committed_value() {
	let (provider, _) = Recorded::new();
	let options = ComboboxOptions::new("from").return_only_on_submit(true);
	let (combobox, mut store) = mounted(options, provider);

	combobox.run(&mut store, search("Man"));
	assert_eq!(
		combobox.run(&mut store, Some(ComboEvent::Submit(1))),
		Signal::Continue(Some(Selection::Value(2)))
	);
	assert_eq!(combobox.run(&mut store, None), Signal::Continue(None));
	assert_eq!(
		store.get("from").unwrap().committed(),
		Some(&Selection::Value(2))
	);
}

#[test]
fn discarded_session_is_a_silent_no_op() {
	let (provider, calls) = Recorded::new();
	let (combobox, mut store) = mounted(ComboboxOptions::new("from").with_default(1), provider);

	store.discard("from");

	assert_eq!(
		combobox.handle_event(&mut store, search("Man")),
		Signal::Continue(None)
	);
	assert_eq!(
		combobox.handle_event(&mut store, Some(ComboEvent::Submit(0))),
		Signal::Continue(None)
	);
	assert!(calls.borrow().is_empty());
	assert!(!store.contains("from"));
}

#[test]
fn reset_reseeds_and_propagates_the_seed_signal() {
	let (provider, calls) = Recorded::new();
	let resets = Rc::new(Cell::new(false));
	let flag = Rc::clone(&resets);
	let options = ComboboxOptions::new("from")
		.rerun_on_update(true)
		.with_blank_search_value("Ceb");
	let combobox = Combobox::new(options, provider).with_reset_callback(move || flag.set(true));
	let mut store = SessionStore::new();

	assert_eq!(combobox.run(&mut store, None), Signal::Restart);
	assert_eq!(combobox.run(&mut store, Some(ComboEvent::Reset)), Signal::Restart);

	assert!(resets.get());
	assert_eq!(*calls.borrow(), vec!["Ceb", "Ceb"]);
	assert_eq!(store.get("from").unwrap().candidate_count(), 1);
}
