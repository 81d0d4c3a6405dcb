use anyhow::Result;
use msel::Intent;
use msel::render::{Theme, chip_line, menu_lines};
use serde_json::{Value, json};
use throbber_widgets_tui::ThrobberState;

use crate::workflow::{SelectOutcome, Step};

/// Print a plain-text representation of the replayed session.
pub(crate) fn print_plain(outcome: &SelectOutcome, chip_width: usize) -> Result<()> {
	println!("{}", format_plain(outcome, chip_width)?);
	Ok(())
}

/// Render the outcome as the lines a terminal user would see, without styles.
pub(crate) fn format_plain(outcome: &SelectOutcome, chip_width: usize) -> Result<String> {
	let view = outcome.view()?;
	let theme = Theme::default();
	let mut lines = Vec::new();

	for step in &outcome.steps {
		lines.push(format!("> {}: {}", step.event, describe(step)));
	}

	let state = if outcome.menu_expanded {
		"expanded"
	} else {
		"collapsed"
	};
	lines.push(format!("menu ({state})"));
	lines.extend(
		menu_lines(&view.menu, &theme, &ThrobberState::default())
			.iter()
			.map(|line| format!("  {line}")),
	);

	let chips = chip_line(&view, chip_width, &theme);
	if !chips.spans.is_empty() {
		lines.push(format!("selected: {chips}"));
	}

	Ok(lines.join("\n"))
}

fn describe(step: &Step) -> String {
	match &step.intent {
		None => "ignored".to_string(),
		Some(Intent::Select { index: Some(index) }) => format!("select {index}"),
		Some(Intent::Select { index: None }) => "select (no index)".to_string(),
		Some(Intent::RemoveAll) => "remove all".to_string(),
		Some(intent @ Intent::Search { text, .. }) => format!(
			"search {text:?}, first visible {}",
			intent.first_visible_or_sentinel().unwrap_or_default()
		),
	}
}

/// Format the replayed session as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SelectOutcome) -> Result<String> {
	let view = outcome.view()?;
	let steps: Vec<Value> = outcome
		.steps
		.iter()
		.map(|step| {
			let first_visible = step
				.intent
				.as_ref()
				.and_then(Intent::first_visible_or_sentinel);
			json!({
				"event": step.event,
				"intent": step.intent,
				"first_visible": first_visible,
			})
		})
		.collect();

	let payload = json!({
		"search_text": outcome.config.search_text,
		"selected": outcome.config.selected_indices,
		"menu_expanded": outcome.menu_expanded,
		"steps": steps,
		"view": view,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the replayed session.
pub(crate) fn print_json(outcome: &SelectOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
