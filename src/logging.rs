//! File-backed logging for the `log` facade.
//!
//! The terminal belongs to the UI while it runs, so records go to a log file
//! in the cache directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::app_dirs;

pub const LOG_FILE_NAME: &str = "mqx.log";
/// Environment variable holding an `env_logger` filter spec.
pub const FILTER_ENV: &str = "MQX_LOG";
const DEFAULT_FILTER: &str = "info";

/// Install the global logger. Returns the path of the log file.
pub fn initialize() -> Result<PathBuf> {
	let dir = app_dirs::get_cache_dir()?;
	let (path, file) = open_log_file(&dir)?;

	env_logger::Builder::from_env(Env::new().filter_or(FILTER_ENV, DEFAULT_FILTER))
		.filter_module("rustls", log::LevelFilter::Warn)
		.target(Target::Pipe(Box::new(file)))
		.format_timestamp_millis()
		.try_init()
		.context("failed to install logger")?;

	log::info!("mqx {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
	Ok(path)
}

fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;
	Ok((path, file))
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn log_file_is_created_in_nested_directories() {
		let dir = tempdir().unwrap();
		let nested = dir.path().join("cache/mqx");

		let (path, _file) = open_log_file(&nested).unwrap();

		assert_eq!(path, nested.join(LOG_FILE_NAME));
		assert!(path.exists());
	}

	#[test]
	fn reopening_appends() {
		let dir = tempdir().unwrap();
		let (path, mut file) = open_log_file(dir.path()).unwrap();
		writeln!(file, "first").unwrap();
		drop(file);

		let (_, mut file) = open_log_file(dir.path()).unwrap();
		writeln!(file, "second").unwrap();
		drop(file);

		assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
	}
}
