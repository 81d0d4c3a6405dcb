//! ratatui presentation of [`SelectView`] values.

mod theme;

pub use theme::Theme;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::config::ResponsiveMode;
use crate::highlight::{Highlight, TruncationStyle, partition};
use crate::options::OptionContent;
use crate::store::{MenuItem, MenuModel, SelectView};

const LOADING_LABEL: &str = "Loading";
const SELECTED_MARKER: &str = "[x] ";
const UNSELECTED_MARKER: &str = "[ ] ";

/// Spans for a highlight, patching the match with the theme's highlight style.
pub fn highlight_spans<'a>(highlight: Highlight<'a>, base: Style, theme: &Theme) -> Vec<Span<'a>> {
	highlight
		.segments()
		.map(|segment| {
			let style = if segment.highlighted {
				base.patch(theme.highlight_style())
			} else {
				base
			};
			Span::styled(segment.text, style)
		})
		.collect()
}

/// Lines for the menu: a spinner while loading, every visible option, and the
/// fallback entry when nothing matches.
#[must_use]
pub fn menu_lines<'a>(menu: &MenuModel<'a>, theme: &Theme, throbber: &ThrobberState) -> Vec<Line<'a>> {
	let mut lines = Vec::new();

	if menu.is_loading {
		let muted = theme.empty_style();
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		lines.push(Line::from(vec![
			spinner.to_symbol_span(throbber),
			Span::styled(LOADING_LABEL, muted),
		]));
	}

	lines.extend(
		menu.visible_items()
			.map(|item| item_line(item, menu.is_disabled, theme)),
	);

	if let Some(no_results) = &menu.no_results {
		lines.push(Line::styled(no_results.message(), theme.empty_style()));
	}

	lines
}

fn item_line<'a>(item: &MenuItem<'a>, control_disabled: bool, theme: &Theme) -> Line<'a> {
	let style = if control_disabled || item.record.is_disabled {
		theme.disabled_style()
	} else if item.is_selected {
		theme.selected_style()
	} else {
		theme.text_style()
	};

	let marker = if item.is_selected {
		SELECTED_MARKER
	} else {
		UNSELECTED_MARKER
	};

	let mut spans = vec![Span::styled(marker, style)];
	match (&item.record.content, item.highlight) {
		(_, Some(highlight)) => spans.extend(highlight_spans(highlight, style, theme)),
		(OptionContent::Node(node), None) => {
			spans.push(Span::styled(node.to_string(), theme.empty_style()));
		}
		(OptionContent::Text(text), None) => spans.push(Span::styled(text.as_str(), style)),
	}
	Line::from(spans)
}

/// Summary of the current selection.
///
/// Large mode shows each chip, truncated to `max_chip_width` columns; small
/// mode collapses them into a count. No selection yields an empty line.
#[must_use]
pub fn chip_line<'a>(view: &SelectView<'a>, max_chip_width: usize, theme: &Theme) -> Line<'a> {
	if view.chips.is_empty() {
		return Line::default();
	}

	match view.responsive_mode {
		ResponsiveMode::Small => Line::styled(view.selection_summary(), theme.chip_style()),
		ResponsiveMode::Large => {
			let mut spans = Vec::with_capacity(view.chips.len() * 2);
			for chip in &view.chips {
				if !spans.is_empty() {
					spans.push(Span::raw(" "));
				}
				let label = partition(chip.label(), "").truncate(max_chip_width, TruncationStyle::Right);
				let text = [label.prefix, label.matched, label.suffix].concat();
				spans.push(Span::styled(format!(" {text} "), theme.chip_style()));
			}
			Line::from(spans)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::SelectConfig;
	use crate::options::{OptionDescriptor, OptionRecord, flatten};
	use crate::store::SelectionStore;

	fn records() -> Vec<OptionRecord> {
		flatten(&[
			OptionDescriptor::item("Apple"),
			OptionDescriptor::item("Banana"),
			OptionDescriptor::item("Blackberry jam and toast"),
		])
	}

	fn texts(lines: &[Line<'_>]) -> Vec<String> {
		lines.iter().map(ToString::to_string).collect()
	}

	#[test]
	fn menu_shows_visible_options_with_selection_markers() {
		let records = records();
		let config = SelectConfig::new().with_search_text("b").with_selected(vec![1]);
		let view = SelectionStore::for_config(&records, &config)
			.view(&config)
			.expect("view");

		let lines = menu_lines(&view.menu, &Theme::default(), &ThrobberState::default());
		assert_eq!(
			texts(&lines),
			vec!["[x] Banana", "[ ] Blackberry jam and toast"]
		);
	}

	#[test]
	fn matched_segment_uses_highlight_style() {
		let theme = Theme::default();
		let spans = highlight_spans(partition("Banana", "nan"), Style::new(), &theme);
		assert_eq!(spans.len(), 3);
		assert_eq!(spans[1].content, "nan");
		assert_eq!(spans[1].style, Style::new().patch(theme.highlight_style()));
		assert_eq!(spans[0].style, Style::new());
	}

	#[test]
	fn fallback_entry_quotes_search_text() {
		let records = records();
		let config = SelectConfig::new().with_search_text("kiwi");
		let view = SelectionStore::for_config(&records, &config)
			.view(&config)
			.expect("view");

		let lines = menu_lines(&view.menu, &Theme::default(), &ThrobberState::default());
		assert_eq!(texts(&lines), vec!["No results match \"kiwi\""]);
	}

	#[test]
	fn loading_adds_a_spinner_line() {
		let records = records();
		let config = SelectConfig::new().with_loading(true);
		let view = SelectionStore::for_config(&records, &config)
			.view(&config)
			.expect("view");

		let lines = menu_lines(&view.menu, &Theme::default(), &ThrobberState::default());
		assert_eq!(lines.len(), 4);
		assert!(lines[0].to_string().ends_with(LOADING_LABEL));
	}

	#[test]
	fn chips_truncate_in_large_mode_and_collapse_in_small_mode() {
		let records = records();
		let config = SelectConfig::new().with_selected(vec![2, 0, 7]);
		let view = SelectionStore::for_config(&records, &config)
			.view(&config)
			.expect("view");
		let theme = Theme::default();

		assert_eq!(
			chip_line(&view, 10, &theme).to_string(),
			" Blackberr…   Apple "
		);

		let small = SelectConfig::new()
			.with_selected(vec![2, 0])
			.with_responsive_mode(ResponsiveMode::Small);
		let view = SelectionStore::for_config(&records, &small)
			.view(&small)
			.expect("view");
		assert_eq!(chip_line(&view, 10, &theme).to_string(), "2 selected");

		let none = SelectConfig::new();
		let view = SelectionStore::for_config(&records, &none)
			.view(&none)
			.expect("view");
		assert!(chip_line(&view, 10, &theme).spans.is_empty());
	}
}
