use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::search::{DefaultFilter, OptionFilter};

/// How much room the selection summary has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsiveMode {
	/// Collapse selected chips into a count.
	Small,
	/// Render one chip per selected option.
	#[default]
	Large,
}

impl ResponsiveMode {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Small => "small",
			Self::Large => "large",
		}
	}
}

/// Caller-controlled inputs for a select control.
///
/// Search text and selected indices are owned by the caller and supplied
/// fresh for every render; nothing in this crate writes back to them.
#[derive(Clone)]
pub struct SelectConfig {
	pub has_reset: bool,
	pub is_disabled: bool,
	pub is_loading: bool,
	pub search_text: String,
	pub selected_indices: Vec<usize>,
	pub responsive_mode: ResponsiveMode,
	pub option_filter: Arc<dyn OptionFilter>,
}

impl Default for SelectConfig {
	fn default() -> Self {
		Self {
			has_reset: true,
			is_disabled: false,
			is_loading: false,
			search_text: String::new(),
			selected_indices: Vec::new(),
			responsive_mode: ResponsiveMode::Large,
			option_filter: Arc::new(DefaultFilter),
		}
	}
}

impl SelectConfig {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
		self.search_text = text.into();
		self
	}

	#[must_use]
	pub fn with_selected(mut self, indices: impl Into<Vec<usize>>) -> Self {
		self.selected_indices = indices.into();
		self
	}

	#[must_use]
	pub fn with_reset(mut self, has_reset: bool) -> Self {
		self.has_reset = has_reset;
		self
	}

	#[must_use]
	pub fn with_disabled(mut self, disabled: bool) -> Self {
		self.is_disabled = disabled;
		self
	}

	#[must_use]
	pub fn with_loading(mut self, loading: bool) -> Self {
		self.is_loading = loading;
		self
	}

	#[must_use]
	pub fn with_responsive_mode(mut self, mode: ResponsiveMode) -> Self {
		self.responsive_mode = mode;
		self
	}

	/// Replace the default matcher with a caller-supplied one.
	#[must_use]
	pub fn with_filter(mut self, filter: impl OptionFilter + 'static) -> Self {
		self.option_filter = Arc::new(filter);
		self
	}

	#[must_use]
	pub fn filter(&self) -> &dyn OptionFilter {
		self.option_filter.as_ref()
	}
}

impl fmt::Debug for SelectConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SelectConfig")
			.field("has_reset", &self.has_reset)
			.field("is_disabled", &self.is_disabled)
			.field("is_loading", &self.is_loading)
			.field("search_text", &self.search_text)
			.field("selected_indices", &self.selected_indices)
			.field("responsive_mode", &self.responsive_mode)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::OptionRecord;

	#[test]
	fn defaults_match_documented_values() {
		let config = SelectConfig::default();
		assert!(config.has_reset);
		assert!(!config.is_disabled);
		assert!(!config.is_loading);
		assert!(config.search_text.is_empty());
		assert!(config.selected_indices.is_empty());
		assert_eq!(config.responsive_mode, ResponsiveMode::Large);

		let record = OptionRecord::new(0, "Anything");
		assert!(config.filter().matches("", &record).expect("default filter"));
	}

	#[test]
	fn builders_override_fields() {
		let config = SelectConfig::new()
			.with_search_text("an")
			.with_selected(vec![2, 0])
			.with_reset(false)
			.with_loading(true)
			.with_responsive_mode(ResponsiveMode::Small)
			.with_filter(|_: &str, _: &OptionRecord| false);

		assert_eq!(config.search_text, "an");
		assert_eq!(config.selected_indices, vec![2, 0]);
		assert!(!config.has_reset);
		assert!(config.is_loading);
		assert_eq!(config.responsive_mode.as_str(), "small");
		assert!(
			!config
				.filter()
				.matches("", &OptionRecord::new(0, "x"))
				.expect("custom filter")
		);
	}
}
