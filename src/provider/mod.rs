//! Collaborators that answer location searches and route requests.
//!
//! The combobox state machine and the host application only ever talk to the
//! traits defined here. [`mapquest`] provides the HTTP-backed implementation;
//! tests substitute closures through [`from_fn`].

mod error;
pub mod mapquest;
mod route;

use std::fmt;
use std::rc::Rc;

pub use error::{ProviderError, ProviderResult};
pub use route::{Coordinate, Maneuver};

/// One raw result returned by a [`SearchProvider`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchHit<T> {
	/// A value paired with the label shown to the user.
	Labeled(String, T),
	/// A bare value whose `Display` form doubles as its label.
	Bare(T),
}

impl<T> SearchHit<T> {
	/// Convenience constructor for labeled hits.
	pub fn labeled(label: impl Into<String>, value: T) -> Self {
		Self::Labeled(label.into(), value)
	}

	/// Split the hit into its display label and underlying value.
	pub fn into_parts(self) -> (String, T)
	where
		T: fmt::Display,
	{
		match self {
			Self::Labeled(label, value) => (label, value),
			Self::Bare(value) => (value.to_string(), value),
		}
	}
}

/// Free-text search backing a combobox.
///
/// `Ok(None)` and `Err(_)` are both treated as "no candidates" by callers; the
/// distinction only matters for diagnostics.
pub trait SearchProvider<T> {
	fn search(&self, text: &str) -> ProviderResult<Option<Vec<SearchHit<T>>>>;
}

/// Turn-by-turn directions between two free-text locations.
pub trait DirectionsProvider {
	/// Return the maneuvers of the first route leg, or `None` when no route
	/// exists between the two locations.
	fn route(&self, from: &str, to: &str) -> ProviderResult<Option<Vec<Maneuver>>>;
}

impl<T, P> SearchProvider<T> for Rc<P>
where
	P: SearchProvider<T> + ?Sized,
{
	fn search(&self, text: &str) -> ProviderResult<Option<Vec<SearchHit<T>>>> {
		(**self).search(text)
	}
}

impl<T, P> SearchProvider<T> for &P
where
	P: SearchProvider<T> + ?Sized,
{
	fn search(&self, text: &str) -> ProviderResult<Option<Vec<SearchHit<T>>>> {
		(**self).search(text)
	}
}

impl<P> DirectionsProvider for Rc<P>
where
	P: DirectionsProvider + ?Sized,
{
	fn route(&self, from: &str, to: &str) -> ProviderResult<Option<Vec<Maneuver>>> {
		(**self).route(from, to)
	}
}

/// Search provider backed by a closure.
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FromFn").finish_non_exhaustive()
	}
}

/// Wrap a closure so it can be used wherever a [`SearchProvider`] is expected.
pub fn from_fn<T, F>(search: F) -> FromFn<F>
where
	F: Fn(&str) -> ProviderResult<Option<Vec<SearchHit<T>>>>,
{
	FromFn(search)
}

impl<T, F> SearchProvider<T> for FromFn<F>
where
	F: Fn(&str) -> ProviderResult<Option<Vec<SearchHit<T>>>>,
{
	fn search(&self, text: &str) -> ProviderResult<Option<Vec<SearchHit<T>>>> {
		(self.0)(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bare_hits_use_display_form_as_label() {
		let (label, value) = SearchHit::Bare(42).into_parts();
		assert_eq!(label, "42");
		assert_eq!(value, 42);
	}

	#[test]
	fn closures_and_shared_providers_answer_searches() {
		let provider = Rc::new(from_fn(|text: &str| {
			Ok(Some(vec![SearchHit::labeled(text.to_uppercase(), 1)]))
		}));
		let shared = Rc::clone(&provider);

		let hits = shared.search("cebu").unwrap().unwrap();
		assert_eq!(hits, vec![SearchHit::labeled("CEBU", 1)]);
	}
}
