use std::rc::Rc;

use anyhow::{Context, Result};
use log::info;
use mqx::provider::mapquest::MapQuestClient;
use mqx::provider::{DirectionsProvider, SearchProvider};
use mqx::ui::style::{self, Theme};
use mqx::{ExploreOutcome, UiConfig};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive explorer.
pub(crate) struct ExploreWorkflow {
	ui: UiConfig,
	theme: Theme,
	client: Rc<MapQuestClient>,
}

impl ExploreWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			mapquest,
			ui,
			theme,
		} = config;

		let theme = theme
			.as_deref()
			.and_then(style::by_name)
			.unwrap_or_else(style::default_theme);
		info!(
			"using MapQuest at {} (radius {} mi, {} matches, country {})",
			mapquest.base_url, mapquest.radius, mapquest.max_matches, mapquest.country
		);
		let client = MapQuestClient::new(mapquest).context("failed to build the HTTP client")?;

		Ok(Self {
			ui,
			theme,
			client: Rc::new(client),
		})
	}

	pub(crate) fn run(self) -> Result<ExploreOutcome> {
		let search: Rc<dyn SearchProvider<String>> = self.client.clone();
		let directions: Rc<dyn DirectionsProvider> = self.client;
		mqx::run(self.ui, self.theme, search, directions)
	}
}
