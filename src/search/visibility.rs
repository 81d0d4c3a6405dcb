use serde::Serialize;

use crate::options::OptionRecord;

use super::{FilterError, OptionFilter};

/// Per-record visibility under a given search text.
///
/// Recomputed for every search change. Hiding a record never removes,
/// reorders or renumbers it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Visibility(Vec<bool>);

impl Visibility {
	/// Evaluate `filter` against every record.
	///
	/// # Errors
	///
	/// Returns the first error raised by `filter`.
	pub fn compute(
		records: &[OptionRecord],
		search_text: &str,
		filter: &dyn OptionFilter,
	) -> Result<Self, FilterError> {
		records
			.iter()
			.map(|record| filter.matches(search_text, record))
			.collect::<Result<Vec<_>, _>>()
			.map(Self)
	}

	#[must_use]
	pub fn is_visible(&self, index: usize) -> bool {
		self.0.get(index).copied().unwrap_or(false)
	}

	/// Smallest visible index, or `None` when nothing is visible.
	#[must_use]
	pub fn first_visible(&self) -> Option<usize> {
		self.0.iter().position(|visible| *visible)
	}

	#[must_use]
	pub fn visible_count(&self) -> usize {
		self.0.iter().filter(|visible| **visible).count()
	}

	/// True when no record is visible, including when there are no records.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		!self.0.contains(&true)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[bool] {
		&self.0
	}
}

impl From<Vec<bool>> for Visibility {
	fn from(flags: Vec<bool>) -> Self {
		Self(flags)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::DefaultFilter;

	fn records(labels: &[&str]) -> Vec<OptionRecord> {
		labels
			.iter()
			.enumerate()
			.map(|(index, label)| OptionRecord::new(index, *label))
			.collect()
	}

	#[test]
	fn visibility_marks_matching_records() {
		let records = records(&["Apple", "Banana", "Cherry"]);
		let visibility = Visibility::compute(&records, "an", &DefaultFilter).expect("compute");
		assert_eq!(visibility.as_slice(), &[false, true, false]);
		assert_eq!(visibility.first_visible(), Some(1));
		assert_eq!(visibility.visible_count(), 1);
		assert!(!visibility.is_empty());
	}

	#[test]
	fn nothing_visible_when_no_record_matches() {
		let records = records(&["Apple", "Banana"]);
		let visibility = Visibility::compute(&records, "zzz", &DefaultFilter).expect("compute");
		assert_eq!(visibility.as_slice(), &[false, false]);
		assert_eq!(visibility.first_visible(), None);
		assert!(visibility.is_empty());
		assert_eq!(visibility.len(), 2);
	}

	#[test]
	fn out_of_range_indices_are_hidden() {
		let visibility = Visibility::from(vec![true]);
		assert!(visibility.is_visible(0));
		assert!(!visibility.is_visible(7));
	}
}
