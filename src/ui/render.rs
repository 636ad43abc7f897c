use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Margin},
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::Paragraph,
};

use super::App;
use super::components::{ComboboxView, render_combobox, render_route};
use super::notices::NoticeLevel;
use super::state::{Focus, Slot};
use crate::combobox::{Selection, WidgetSession};

const HELP: &str = "Tab focus • ↑/↓ choose • Enter select • Esc reset • Ctrl-G directions • Ctrl-Q quit";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.sync_input_styles();

		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let from = self.combobox_view(Slot::From);
		let to = self.combobox_view(Slot::To);
		let [
			title_area,
			from_area,
			to_area,
			button_area,
			notice_area,
			map_area,
			help_area,
		] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(from.height()),
			Constraint::Length(to.height()),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(6),
			Constraint::Length(1),
		])
		.areas(area);

		frame.render_widget(
			Paragraph::new(self.config.title.as_str())
				.alignment(Alignment::Center)
				.style(self.theme.title_style()),
			title_area,
		);
		render_combobox(frame, from_area, &from);
		render_combobox(frame, to_area, &to);

		let button = Paragraph::new(format!("[ {} ]", self.config.button_label))
			.alignment(Alignment::Center)
			.style(self.theme.button_style(self.focus == Focus::Button));
		frame.render_widget(button, button_area);

		if let Some(notice) = self.notices.borrow().current() {
			let style = match notice.level {
				NoticeLevel::Info => self.theme.info_style(),
				NoticeLevel::Warning => self.theme.warning_style(),
			};
			frame.render_widget(
				Paragraph::new(Line::from(Span::styled(notice.message.as_str(), style))),
				notice_area,
			);
		}

		render_route(frame, map_area, &self.map, self.trip.as_ref(), &self.theme);

		frame.render_widget(
			Paragraph::new(HELP)
				.alignment(Alignment::Center)
				.style(self.theme.placeholder_style()),
			help_area,
		);
	}

	fn combobox_view(&self, slot: Slot) -> ComboboxView<'_, 'a> {
		let combobox = self.combobox(slot);
		let session = self.session(slot);
		ComboboxView {
			label: combobox.options().label.as_deref().unwrap_or(combobox.key()),
			input: self.input(slot),
			candidates: session
				.map(|session| session.candidate_labels().collect())
				.unwrap_or_default(),
			committed: session.and_then(WidgetSession::committed).map(describe),
			focused: self.focus.slot() == Some(slot),
			throbber_state: &self.throbber_state,
			theme: &self.theme,
		}
	}

	fn sync_input_styles(&mut self) {
		let placeholder = self.theme.placeholder_style();
		for slot in Slot::ALL {
			let focused = self.focus.slot() == Some(slot);
			let textarea = self.input_mut(slot).textarea_mut();
			textarea.set_placeholder_style(placeholder);
			textarea.set_cursor_style(if focused {
				Style::default().add_modifier(Modifier::REVERSED)
			} else {
				Style::default()
			});
		}
	}
}

fn describe(selection: &Selection<String>) -> String {
	match selection {
		Selection::Value(value) => value.clone(),
		Selection::Index(index) => format!("#{index}"),
	}
}
