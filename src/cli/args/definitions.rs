use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `mqx` binary.
#[derive(Parser, Debug)]
#[command(
	name = "mqx",
	version,
	long_version = long_version(),
	about = "Search Philippine locations and plot MapQuest directions in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MQX_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'k',
		long = "api-key",
		value_name = "KEY",
		help = "MapQuest API key (default: mapquest.api_key or $API_KEY)"
	)]
	pub(crate) api_key: Option<String>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		help = "MapQuest API base URL (default: https://www.mapquestapi.com)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_name = "MILES",
		help = "Radius searched around the typed location (default: 50)"
	)]
	pub(crate) radius: Option<u32>,
	#[arg(
		long = "max-matches",
		value_name = "NUM",
		help = "Maximum number of suggestions per search (default: 5)"
	)]
	pub(crate) max_matches: Option<u32>,
	#[arg(
		long,
		value_name = "CODE",
		help = "Country code suggestions are restricted to (default: PH)"
	)]
	pub(crate) country: Option<String>,
	#[arg(
		long,
		value_name = "CODE",
		help = "Location category searched for (default: ADM1)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "HTTP timeout for MapQuest requests (default: 10)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		long = "debounce",
		value_name = "MS",
		help = "Idle time after typing before a search runs (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "blank-search",
		value_name = "TEXT",
		help = "Search issued automatically when a picker is created or reset (default: none)"
	)]
	pub(crate) blank_search_value: Option<String>,
	#[arg(
		long = "rerun-on-update",
		value_parser = BoolishValueParser::new(),
		help = "Re-evaluate the screen after new suggestions arrive (default: enabled)"
	)]
	pub(crate) rerun_on_update: Option<bool>,
	#[arg(
		long = "stop-on-update",
		value_parser = BoolishValueParser::new(),
		help = "Stop evaluating later pickers after new suggestions arrive (default: disabled)"
	)]
	pub(crate) stop_on_update: Option<bool>,
	#[arg(
		long = "return-only-on-submit",
		value_parser = BoolishValueParser::new(),
		help = "Report a value only in the cycle it was submitted (default: disabled)"
	)]
	pub(crate) return_only_on_submit: Option<bool>,
	#[arg(
		long = "clear-on-submit",
		value_parser = BoolishValueParser::new(),
		help = "Clear the typed text after a suggestion is picked (default: disabled)"
	)]
	pub(crate) clear_on_submit: Option<bool>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title shown above the pickers (default: MapQuest Explorer PH)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "from-label",
		value_name = "TEXT",
		help = "Label of the origin picker (default: From Location)"
	)]
	pub(crate) from_label: Option<String>,
	#[arg(
		long = "from-placeholder",
		value_name = "TEXT",
		help = "Placeholder of the origin picker (default: Your Current Location)"
	)]
	pub(crate) from_placeholder: Option<String>,
	#[arg(
		long = "to-label",
		value_name = "TEXT",
		help = "Label of the destination picker (default: To Location)"
	)]
	pub(crate) to_label: Option<String>,
	#[arg(
		long = "to-placeholder",
		value_name = "TEXT",
		help = "Placeholder of the destination picker (default: Your Goal Destination)"
	)]
	pub(crate) to_placeholder: Option<String>,
	#[arg(
		long = "button-label",
		value_name = "TEXT",
		help = "Label of the directions button (default: Get Instructions)"
	)]
	pub(crate) button_label: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the trip on exit"
	)]
	pub(crate) output: OutputFormat,
}
