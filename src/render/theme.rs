use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub text: Style,
	pub highlight: Style,
	pub selected: Style,
	pub disabled: Style,
	pub empty: Style,
	pub chip: Style,
}

impl Theme {
	#[must_use]
	pub fn text_style(&self) -> Style {
		self.text
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn selected_style(&self) -> Style {
		self.selected
	}

	#[must_use]
	pub fn disabled_style(&self) -> Style {
		self.disabled
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn chip_style(&self) -> Style {
		self.chip
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			text: Style::new(),
			highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
			selected: Style::new().fg(Color::Cyan),
			disabled: Style::new().fg(Color::DarkGray),
			empty: Style::new().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
			chip: Style::new().fg(Color::Black).bg(Color::Gray),
		}
	}
}
