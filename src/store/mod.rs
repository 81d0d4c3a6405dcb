//! Stateless reduction of user actions into caller-facing intents.
//!
//! [`SelectionStore`] holds nothing between calls. It borrows the current
//! records and the configured filter, and every method computes a fresh value
//! from its arguments. Selection is never modified here: interactions are
//! reported as [`Intent`]s and the caller decides what they mean for its own
//! `selected_indices`.

mod view;


use serde::Serialize;
use tracing::trace;

use crate::config::SelectConfig;
use crate::highlight::partition;
use crate::options::OptionRecord;
use crate::search::{FilterError, OptionFilter, Visibility};

pub use view::{Chip, MenuItem, MenuModel, NoResults, SelectView};

/// Wire value reported for "no visible option" where an integer is required.
pub const NOT_FOUND: isize = -1;

/// A user action as seen by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Menu activation, checkbox toggle or chip removal for one option.
	Interact(Option<usize>),
	/// Bulk removal of every selection.
	RemoveAll,
	/// New search text.
	Search(String),
}

/// Outcome surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
	Select {
		index: Option<usize>,
	},
	RemoveAll,
	Search {
		text: String,
		first_visible: Option<usize>,
	},
}

impl Intent {
	/// First visible index in its integer wire form, using [`NOT_FOUND`].
	#[must_use]
	pub fn first_visible_or_sentinel(&self) -> Option<isize> {
		match self {
			Self::Search { first_visible, .. } => Some(
				first_visible
					.and_then(|index| isize::try_from(index).ok())
					.unwrap_or(NOT_FOUND),
			),
			_ => None,
		}
	}
}

/// Pure reducer over one options snapshot.
#[derive(Clone, Copy)]
pub struct SelectionStore<'a> {
	records: &'a [OptionRecord],
	filter: &'a dyn OptionFilter,
}

impl<'a> SelectionStore<'a> {
	#[must_use]
	pub fn new(records: &'a [OptionRecord], filter: &'a dyn OptionFilter) -> Self {
		Self { records, filter }
	}

	/// Store using the filter configured in `config`.
	#[must_use]
	pub fn for_config(records: &'a [OptionRecord], config: &'a SelectConfig) -> Self {
		Self::new(records, config.filter())
	}

	#[must_use]
	pub fn records(&self) -> &'a [OptionRecord] {
		self.records
	}

	/// Visibility of every record under `search_text`.
	///
	/// # Errors
	///
	/// Propagates the first error raised by the configured filter.
	pub fn visibility(&self, search_text: &str) -> Result<Visibility, FilterError> {
		let visibility = Visibility::compute(self.records, search_text, self.filter)?;
		trace!(
			search = search_text,
			visible = visibility.visible_count(),
			total = visibility.len(),
			"computed visibility"
		);
		Ok(visibility)
	}

	/// Smallest index whose record matches `search_text`.
	///
	/// Stops at the first match, so the filter is not consulted for later records.
	///
	/// # Errors
	///
	/// Propagates the first error raised by the configured filter.
	pub fn first_visible_index(&self, search_text: &str) -> Result<Option<usize>, FilterError> {
		for record in self.records {
			if self.filter.matches(search_text, record)? {
				return Ok(Some(record.index));
			}
		}
		Ok(None)
	}

	/// Fallback message when nothing matches `search_text`.
	///
	/// # Errors
	///
	/// Propagates the first error raised by the configured filter.
	pub fn no_results(&self, search_text: &str) -> Result<Option<NoResults>, FilterError> {
		let visibility = self.visibility(search_text)?;
		Ok(NoResults::for_visibility(&visibility, search_text))
	}

	/// Turn an action into the intent reported to the caller.
	///
	/// # Errors
	///
	/// Only [`Action::Search`] consults the filter and can fail.
	pub fn reduce(&self, action: Action) -> Result<Intent, FilterError> {
		let intent = match action {
			Action::Interact(index) => Intent::Select { index },
			Action::RemoveAll => Intent::RemoveAll,
			Action::Search(text) => {
				let first_visible = self.first_visible_index(&text)?;
				Intent::Search {
					text,
					first_visible,
				}
			}
		};
		Ok(intent)
	}

	/// Everything a renderer needs for the current inputs.
	///
	/// # Errors
	///
	/// Propagates the first error raised by the configured filter.
	pub fn view(&self, config: &'a SelectConfig) -> Result<SelectView<'a>, FilterError> {
		let search_text = config.search_text.as_str();
		let visibility = self.visibility(search_text)?;

		let items = self
			.records
			.iter()
			.map(|record| {
				let is_hidden = !visibility.is_visible(record.index);
				let highlight = if is_hidden {
					None
				} else {
					record.text().map(|text| partition(text, search_text))
				};
				MenuItem {
					record,
					is_hidden,
					is_selected: config.selected_indices.contains(&record.index),
					highlight,
				}
			})
			.collect();

		let menu = MenuModel {
			items,
			is_disabled: config.is_disabled,
			is_loading: config.is_loading,
			first_visible: visibility.first_visible(),
			no_results: NoResults::for_visibility(&visibility, search_text),
		};

		Ok(SelectView {
			menu,
			chips: self.chips(&config.selected_indices),
			has_reset: config.has_reset,
			responsive_mode: config.responsive_mode,
		})
	}

	/// Resolve selected indices to chips in selection order.
	///
	/// Indices without a record are skipped; duplicates are kept as given.
	#[must_use]
	pub fn chips(&self, selected_indices: &[usize]) -> Vec<Chip<'a>> {
		selected_indices
			.iter()
			.filter_map(|index| self.records.get(*index))
			.map(Chip::new)
			.collect()
	}
}
