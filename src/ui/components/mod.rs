//! Widgets drawn by the explorer screen.

pub mod combobox;
pub mod map;

pub use combobox::{ComboboxView, render_combobox};
pub use map::render_route;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to `width` terminal columns, ending with an ellipsis when shortened.
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let budget = width - 1;
	let mut used = 0;
	let mut truncated = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > budget {
			break;
		}
		used += ch_width;
		truncated.push(ch);
	}
	truncated.push('…');
	truncated
}
