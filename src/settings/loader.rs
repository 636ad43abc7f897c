use anyhow::{Context, Result};
use log::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{ENV_PREFIX, build_config};
use crate::cli::CliArgs;

/// Resolve the explorer settings: MapQuest access, picker behaviour and UI
/// text, layered from config files, `MQX__` variables and CLI flags.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let layered = build_config(cli).context("failed to read mqx config files")?;
	let mut raw: RawConfig = layered.try_deserialize().with_context(|| {
		format!(
			"invalid mqx settings in {} or {}__* variables",
			describe_files(cli),
			ENV_PREFIX.to_uppercase()
		)
	})?;
	raw.apply_cli_overrides(cli);
	debug!("settings layered from {}", describe_files(cli));
	raw.resolve(cli)
}

fn describe_files(cli: &CliArgs) -> String {
	match (cli.no_config, cli.config.as_slice()) {
		(true, []) => "no config files".to_string(),
		(true, explicit) => join_paths(explicit),
		(false, []) => "the default config files".to_string(),
		(false, explicit) => format!("the default config files, {}", join_paths(explicit)),
	}
}

fn join_paths(paths: &[std::path::PathBuf]) -> String {
	paths
		.iter()
		.map(|path| path.display().to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn explicit_file_and_flags_resolve_together() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("trip.toml");
		fs::write(&path, "[mapquest]\nradius = 25\n\n[ui]\ntitle = \"Island hopping\"\n").unwrap();

		let cli = CliArgs::parse_from([
			"mqx",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
			"--api-key",
			"flag-key",
		]);
		let resolved = load(&cli).unwrap();

		assert_eq!(resolved.mapquest.api_key, "flag-key");
		assert_eq!(resolved.mapquest.radius, 25);
		assert_eq!(resolved.ui.title, "Island hopping");
	}

	#[test]
	fn malformed_settings_name_the_offending_file() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("broken.toml");
		fs::write(&path, "[mapquest]\nradius = \"far\"\n").unwrap();

		let cli = CliArgs::parse_from([
			"mqx",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
			"--api-key",
			"flag-key",
		]);
		let message = load(&cli).unwrap_err().to_string();

		assert!(message.contains("broken.toml"));
		assert!(message.contains("MQX__*"));
	}
}
