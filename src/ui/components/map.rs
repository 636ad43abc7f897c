//! Terminal rendering of [`MapView`]: a world outline with the plotted route.

use ratatui::{
	Frame,
	layout::{Constraint, Layout, Rect},
	text::{Line, Span},
	widgets::{
		Block, List, ListItem, Paragraph, Wrap,
		canvas::{Canvas, Line as Segment, Map, MapResolution},
	},
};

use crate::map::MapView;
use crate::ui::directions::Trip;
use crate::ui::style::Theme;

pub fn render_route(
	frame: &mut Frame,
	area: Rect,
	map: &MapView,
	trip: Option<&Trip>,
	theme: &Theme,
) {
	let [canvas_area, steps_area] =
		Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);

	let title = match trip {
		Some(trip) => format!("{} → {}", trip.from, trip.to),
		None => "Map".to_string(),
	};
	let viewport = map.viewport();
	let markers = map.markers();
	let canvas = Canvas::default()
		.block(Block::bordered().title(Span::styled(title, theme.title_style())))
		.x_bounds(viewport.lng)
		.y_bounds(viewport.lat)
		.paint(|ctx| {
			ctx.draw(&Map {
				color: theme.land,
				resolution: MapResolution::High,
			});
			ctx.layer();
			for pair in markers.windows(2) {
				ctx.draw(&Segment {
					x1: pair[0].position.lng,
					y1: pair[0].position.lat,
					x2: pair[1].position.lng,
					y2: pair[1].position.lat,
					color: theme.route,
				});
			}
			for (index, marker) in markers.iter().enumerate() {
				ctx.print(
					marker.position.lng,
					marker.position.lat,
					Span::styled((index + 1).to_string(), theme.marker_style()),
				);
			}
		});
	frame.render_widget(canvas, canvas_area);

	let block = Block::bordered().title(Span::styled("Directions", theme.title_style()));
	if map.is_empty() {
		let empty = Paragraph::new(Line::from(Span::styled(
			"No route plotted.",
			theme.placeholder_style(),
		)))
		.block(block)
		.wrap(Wrap { trim: true });
		frame.render_widget(empty, steps_area);
		return;
	}

	let items: Vec<ListItem> = markers
		.iter()
		.enumerate()
		.map(|(index, marker)| {
			ListItem::new(Line::from(vec![
				Span::styled(format!("{:>2}. ", index + 1), theme.marker_style()),
				Span::styled(marker.label.clone(), theme.info_style()),
			]))
		})
		.collect();
	frame.render_widget(List::new(items).block(block), steps_area);
}
