use std::fmt;

use serde::Serialize;

use crate::config::ResponsiveMode;
use crate::highlight::Highlight;
use crate::options::OptionRecord;
use crate::search::Visibility;

/// Fallback shown in the menu when no option is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoResults {
	pub search_text: String,
}

impl NoResults {
	/// `Some` exactly when every visibility entry is false.
	#[must_use]
	pub fn for_visibility(visibility: &Visibility, search_text: &str) -> Option<Self> {
		visibility.is_empty().then(|| Self {
			search_text: search_text.to_string(),
		})
	}

	#[must_use]
	pub fn message(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for NoResults {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "No results match \"{}\"", self.search_text)
	}
}

/// One option as the menu should present it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem<'a> {
	pub record: &'a OptionRecord,
	pub is_hidden: bool,
	pub is_selected: bool,
	/// Present for visible text options only.
	pub highlight: Option<Highlight<'a>>,
}

/// Input for the menu collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuModel<'a> {
	pub items: Vec<MenuItem<'a>>,
	pub is_disabled: bool,
	pub is_loading: bool,
	pub first_visible: Option<usize>,
	pub no_results: Option<NoResults>,
}

impl<'a> MenuModel<'a> {
	pub fn visible_items(&self) -> impl Iterator<Item = &MenuItem<'a>> {
		self.items.iter().filter(|item| !item.is_hidden)
	}
}

/// A selected option shown as a removable chip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chip<'a> {
	pub index: usize,
	pub record: &'a OptionRecord,
}

impl<'a> Chip<'a> {
	#[must_use]
	pub fn new(record: &'a OptionRecord) -> Self {
		Self {
			index: record.index,
			record,
		}
	}

	/// Chip text; opaque nodes render blank.
	#[must_use]
	pub fn label(&self) -> &'a str {
		self.record.text().unwrap_or_default()
	}
}

/// Derived rendering facts for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectView<'a> {
	pub menu: MenuModel<'a>,
	pub chips: Vec<Chip<'a>>,
	pub has_reset: bool,
	pub responsive_mode: ResponsiveMode,
}

impl SelectView<'_> {
	/// Summary used when chips are collapsed.
	#[must_use]
	pub fn selection_summary(&self) -> String {
		format!("{} selected", self.chips.len())
	}
}
