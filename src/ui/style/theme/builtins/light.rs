use ratatui::style::{Color, Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

pub const NAME: &str = "light";

pub const LIGHT: Theme = Theme {
	title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::Rgb(71, 85, 105)),
	focus: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	placeholder: Style::new().fg(Color::Gray),
	highlight: Style::new()
		.bg(Color::Rgb(226, 232, 240))
		.fg(Color::Rgb(30, 64, 175)),
	committed: Style::new().fg(Color::Green),
	button: Style::new().fg(Color::White).bg(Color::Rgb(37, 99, 235)),
	warning: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
	info: Style::new().fg(Color::DarkGray),
	land: Color::Gray,
	route: Color::Blue,
	marker: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, LIGHT);
