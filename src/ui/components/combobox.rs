use ratatui::{
	Frame,
	layout::{Constraint, Layout, Rect},
	text::{Line, Span},
	widgets::{Block, List, ListItem, ListState, Paragraph},
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::truncate_to_width;
use crate::ui::input::ComboInput;
use crate::ui::style::Theme;

/// Rows of the bordered text input.
pub const INPUT_HEIGHT: u16 = 3;
/// Candidate rows shown at most while the dropdown is open.
pub const MAX_DROPDOWN_ROWS: u16 = 5;

/// Everything needed to draw one location picker.
pub struct ComboboxView<'v, 'a> {
	pub label: &'v str,
	pub input: &'v ComboInput<'a>,
	pub candidates: Vec<&'v str>,
	pub committed: Option<String>,
	pub focused: bool,
	pub throbber_state: &'v ThrobberState,
	pub theme: &'v Theme,
}

impl ComboboxView<'_, '_> {
	/// Rows the picker occupies, dropdown included.
	#[must_use]
	pub fn height(&self) -> u16 {
		INPUT_HEIGHT + 1 + self.dropdown_rows()
	}

	fn dropdown_rows(&self) -> u16 {
		if !self.focused || !self.input.is_dropdown_open() {
			return 0;
		}
		u16::try_from(self.candidates.len())
			.unwrap_or(u16::MAX)
			.min(MAX_DROPDOWN_ROWS)
	}
}

pub fn render_combobox(frame: &mut Frame, area: Rect, view: &ComboboxView<'_, '_>) {
	let [input_area, committed_area, dropdown_area] = Layout::vertical([
		Constraint::Length(INPUT_HEIGHT),
		Constraint::Length(1),
		Constraint::Min(0),
	])
	.areas(area);

	let theme = view.theme;
	let mut block = Block::bordered()
		.title(Span::styled(view.label, theme.label_style(view.focused)))
		.border_style(theme.border_style(view.focused));
	if view.input.is_pending() {
		let spinner = Throbber::default()
			.style(theme.placeholder_style())
			.throbber_style(theme.placeholder_style());
		let status = Line::from(vec![
			spinner.to_symbol_span(view.throbber_state),
			Span::styled("searching", theme.placeholder_style()),
		]);
		block = block.title_top(status.right_aligned());
	}
	let inner = block.inner(input_area);
	frame.render_widget(block, input_area);
	frame.render_widget(view.input.textarea(), inner);

	let width = usize::from(committed_area.width.saturating_sub(2));
	let committed = match &view.committed {
		Some(label) => Line::from(vec![
			Span::styled("✓ ", theme.committed_style()),
			Span::styled(truncate_to_width(label, width), theme.committed_style()),
		]),
		None => Line::from(Span::styled("Nothing selected", theme.placeholder_style())),
	};
	frame.render_widget(Paragraph::new(committed), committed_area);

	if view.dropdown_rows() == 0 || dropdown_area.height == 0 {
		return;
	}
	let width = usize::from(dropdown_area.width.saturating_sub(2));
	let items: Vec<ListItem> = view
		.candidates
		.iter()
		.map(|label| ListItem::new(truncate_to_width(label, width)))
		.collect();
	let list = List::new(items)
		.style(theme.label_style(false))
		.highlight_style(theme.highlight_style())
		.highlight_symbol("› ");
	let mut state = ListState::default().with_selected(Some(view.input.highlighted()));
	frame.render_stateful_widget(list, dropdown_area, &mut state);
}
