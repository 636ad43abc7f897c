use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	let mapquest = &config.mapquest;
	let ui = &config.ui;

	println!("Effective configuration:");
	println!("  API key: {}", mask_key(&mapquest.api_key));
	println!("  Base URL: {}", mapquest.base_url);
	println!("  Search radius: {} mi", mapquest.radius);
	println!("  Max matches: {}", mapquest.max_matches);
	println!("  Country: {}", mapquest.country);
	println!("  Category: {}", mapquest.category);
	println!("  Timeout: {}s", mapquest.timeout.as_secs());
	println!("  Debounce: {}ms", ui.search.debounce.as_millis());
	match &ui.search.blank_search_value {
		Some(value) => println!("  Blank search: '{value}'"),
		None => println!("  Blank search: (none)"),
	}
	println!(
		"  Rerun on update: {}",
		bool_to_word(ui.search.rerun_on_update)
	);
	println!(
		"  Stop on update: {}",
		bool_to_word(ui.search.stop_on_update)
	);
	println!(
		"  Return only on submit: {}",
		bool_to_word(ui.search.return_only_on_submit)
	);
	println!(
		"  Clear on submit: {}",
		bool_to_word(ui.search.clear_on_submit)
	);
	println!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	println!("  Title: {}", ui.title);
	println!("  From: {} ({})", ui.from.label, ui.from.placeholder);
	println!("  To: {} ({})", ui.to.label, ui.to.placeholder);
	println!("  Button: {}", ui.button_label);
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

/// Keep only the last four characters of the key visible.
fn mask_key(key: &str) -> String {
	let count = key.chars().count();
	if count == 0 {
		return "(not set)".to_string();
	}
	if count <= 4 {
		return "*".repeat(count);
	}
	let visible: String = key.chars().skip(count - 4).collect();
	format!("{}{visible}", "*".repeat(count - 4))
}

#[cfg(test)]
mod tests {
	use mqx::UiConfig;
	use mqx::provider::mapquest::MapQuestOptions;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn keys_are_masked() {
		assert_eq!(mask_key(""), "(not set)");
		assert_eq!(mask_key("abc"), "***");
		assert_eq!(mask_key("abcdefgh"), "****efgh");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			mapquest: MapQuestOptions::new("secret-key"),
			ui: UiConfig::default(),
			theme: Some("light".into()),
		};

		print_summary(&config);
	}
}
