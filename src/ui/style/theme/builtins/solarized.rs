use ratatui::style::{Color, Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

pub const NAME: &str = "solarized";

pub const SOLARIZED: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::Rgb(147, 161, 161)),
	focus: Style::new()
		.fg(Color::Rgb(38, 139, 210))
		.add_modifier(Modifier::BOLD),
	placeholder: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0)),
	committed: Style::new().fg(Color::Rgb(133, 153, 0)),
	button: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	warning: Style::new()
		.fg(Color::Rgb(203, 75, 22))
		.add_modifier(Modifier::BOLD),
	info: Style::new().fg(Color::Rgb(131, 148, 150)),
	land: Color::Rgb(88, 110, 117),
	route: Color::Rgb(42, 161, 152),
	marker: Style::new()
		.fg(Color::Rgb(220, 50, 47))
		.add_modifier(Modifier::BOLD),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SOLARIZED);
