use std::time::Duration;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"mqx",
		"--api-key",
		"cli-key",
		"--radius",
		"20",
		"--debounce",
		"150",
		"--clear-on-submit",
		"true",
		"--title",
		"Road trip",
		"--from-label",
		"Origin",
		"--theme",
		"light",
	]);

	let mut config: RawConfig = toml_config(
		"[mapquest]\napi_key = \"file-key\"\nradius = 40\n\n[ui]\ntitle = \"From file\"\n",
	);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.mapquest.api_key.as_deref(), Some("cli-key"));
	assert_eq!(config.mapquest.radius, Some(20));
	assert_eq!(config.search.debounce_ms, Some(150));
	assert_eq!(config.search.clear_on_submit, Some(true));
	assert_eq!(config.ui.title.as_deref(), Some("Road trip"));
	assert_eq!(
		config.ui.from.as_ref().and_then(|from| from.label.as_deref()),
		Some("Origin")
	);
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["mqx", "--api-key", "secret"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("valid configuration");

	assert_eq!(resolved.mapquest.api_key, "secret");
	assert_eq!(resolved.mapquest.radius, 50);
	assert_eq!(resolved.mapquest.max_matches, 5);
	assert_eq!(resolved.mapquest.country, "PH");
	assert_eq!(resolved.mapquest.category, "ADM1");
	assert_eq!(resolved.ui.from.label, "From Location");
	assert_eq!(resolved.ui.to.placeholder, "Your Goal Destination");
	assert_eq!(resolved.ui.search.debounce, Duration::from_millis(300));
	assert!(resolved.ui.search.rerun_on_update);
	assert!(resolved.theme.is_none());
}

#[test]
fn picker_sections_only_touch_their_picker() {
	let cli = CliArgs::parse_from(["mqx", "--api-key", "secret"]);
	let mut config: RawConfig =
		toml_config("[ui.to]\nlabel = \"Destination\"\nplaceholder = \"Where to?\"\n");
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("valid configuration");

	assert_eq!(resolved.ui.to.label, "Destination");
	assert_eq!(resolved.ui.to.placeholder, "Where to?");
	assert_eq!(resolved.ui.from.label, "From Location");
	assert_eq!(resolved.ui.to.key, "to_combobox");
}

#[test]
fn zero_radius_names_its_origin() {
	let cli = CliArgs::parse_from(["mqx", "--api-key", "secret", "--radius", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("mapquest.radius"));
	assert!(message.contains("--radius"));
}

#[test]
fn unknown_theme_is_rejected() {
	let cli = CliArgs::parse_from(["mqx", "--api-key", "secret", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("neon"));
}

fn toml_config(source: &str) -> RawConfig {
	config::Config::builder()
		.add_source(config::File::from_str(source, config::FileFormat::Toml))
		.build()
		.expect("config builds")
		.try_deserialize()
		.expect("config deserializes")
}
