use ratatui::style::{Color, Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::Rgb(148, 163, 184)),
	focus: Style::new().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
	placeholder: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	committed: Style::new().fg(Color::LightGreen),
	button: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	warning: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
	info: Style::new().fg(Color::Gray),
	land: Color::DarkGray,
	route: Color::LightCyan,
	marker: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SLATE).with_aliases(&["dark"]);
