use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub title: Style,
	pub label: Style,
	pub focus: Style,
	pub placeholder: Style,
	pub highlight: Style,
	pub committed: Style,
	pub button: Style,
	pub warning: Style,
	pub info: Style,
	pub land: Color,
	pub route: Color,
	pub marker: Style,
}

impl Theme {
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn label_style(&self, focused: bool) -> Style {
		if focused { self.focus } else { self.label }
	}

	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused {
			Style::new().fg(self.focus.fg.unwrap_or(Color::Reset))
		} else {
			Style::new().fg(self.placeholder.fg.unwrap_or(Color::Reset))
		}
	}

	#[must_use]
	pub fn placeholder_style(&self) -> Style {
		self.placeholder
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn committed_style(&self) -> Style {
		self.committed
	}

	#[must_use]
	pub fn button_style(&self, focused: bool) -> Style {
		if focused {
			self.button.add_modifier(Modifier::REVERSED)
		} else {
			self.button
		}
	}

	#[must_use]
	pub fn warning_style(&self) -> Style {
		self.warning
	}

	#[must_use]
	pub fn info_style(&self) -> Style {
		self.info
	}

	#[must_use]
	pub fn marker_style(&self) -> Style {
		self.marker
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn matches(&self, normalized: &str) -> bool {
		self.name == normalized || self.aliases.contains(&normalized)
	}
}

pub(super) fn find<'a>(
	definitions: &'a [ThemeDefinition],
	name: &str,
) -> Option<&'a ThemeDefinition> {
	let normalized = name.trim().to_ascii_lowercase();
	definitions
		.iter()
		.find(|definition| definition.matches(&normalized))
}
