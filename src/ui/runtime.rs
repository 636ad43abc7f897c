mod cycle;
mod event_loop;

use std::rc::Rc;

use anyhow::Result;

use crate::provider::{DirectionsProvider, SearchProvider};

use super::App;
use super::config::UiConfig;
use super::state::ExploreOutcome;
use super::style::Theme;

pub use cycle::Trigger;

/// Construct an [`App`] for the given providers and run it to completion.
pub fn run(
	config: UiConfig,
	theme: Theme,
	search: Rc<dyn SearchProvider<String>>,
	directions: Rc<dyn DirectionsProvider>,
) -> Result<ExploreOutcome> {
	let mut app = App::new(config, search, directions)?.with_theme(theme);
	app.run()
}
