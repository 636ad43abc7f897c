mod builtins;
mod types;

pub use types::{Theme, ThemeDefinition};

/// Theme used when no name was configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins::DEFAULT.theme
}

/// Canonical names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

/// Look up a bundled theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	types::find(builtins::DEFINITIONS, name).map(|definition| definition.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive_and_honours_aliases() {
		assert_eq!(by_name("Slate"), Some(default_theme()));
		assert_eq!(by_name(" dark "), by_name("slate"));
		assert!(by_name("solarized").is_some());
		assert!(by_name("neon").is_none());
	}

	#[test]
	fn names_list_every_definition_once() {
		assert_eq!(names(), vec!["slate", "solarized", "light"]);
	}
}
