use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::{OptionContent, OptionDescriptor};

/// One flattened, index-addressed option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionRecord {
	pub index: usize,
	pub content: OptionContent,
	pub is_disabled: bool,
}

impl OptionRecord {
	#[must_use]
	pub fn new(index: usize, content: impl Into<OptionContent>) -> Self {
		Self {
			index,
			content: content.into(),
			is_disabled: false,
		}
	}

	/// Textual content of the record, or `None` for opaque nodes.
	#[must_use]
	pub fn text(&self) -> Option<&str> {
		self.content.as_text()
	}
}

/// Flatten an option tree into records numbered `0..n` in depth-first order.
///
/// Groups are transparent. Items without content receive an empty text record
/// so that the indices of their siblings do not shift.
#[must_use]
pub fn flatten(options: &[OptionDescriptor]) -> Vec<OptionRecord> {
	let mut records = Vec::new();
	let mut pending = vec![options.iter()];

	while let Some(level) = pending.last_mut() {
		let Some(node) = level.next() else {
			pending.pop();
			continue;
		};

		match node {
			OptionDescriptor::Item { content, disabled } => records.push(OptionRecord {
				index: records.len(),
				content: content.clone().unwrap_or_default(),
				is_disabled: *disabled,
			}),
			OptionDescriptor::Group { children, .. } => pending.push(children.iter()),
		}
	}

	records
}

/// Cache of flattened records keyed by the identity of the options collection.
///
/// The cache is rebuilt whenever a different `Arc` is supplied, even if its
/// contents compare equal, and reused for as long as the same `Arc` is passed.
#[derive(Debug)]
pub struct OptionRegistry {
	source: Option<Arc<[OptionDescriptor]>>,
	records: Arc<[OptionRecord]>,
}

impl OptionRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self {
			source: None,
			records: Arc::from(Vec::new()),
		}
	}

	/// Return the records for `options`, flattening only if the collection changed.
	pub fn records(&mut self, options: &Arc<[OptionDescriptor]>) -> Arc<[OptionRecord]> {
		let current = self
			.source
			.as_ref()
			.is_some_and(|source| Arc::ptr_eq(source, options));

		if !current {
			self.records = Arc::from(flatten(options));
			self.source = Some(Arc::clone(options));
			debug!(count = self.records.len(), "rebuilt option records");
		}

		Arc::clone(&self.records)
	}

	/// Records from the last build; empty before the first call to [`Self::records`].
	#[must_use]
	pub fn cached(&self) -> &[OptionRecord] {
		&self.records
	}

	/// Drop the cached records so the next lookup rebuilds them.
	pub fn invalidate(&mut self) {
		self.source = None;
		self.records = Arc::from(Vec::new());
	}
}

impl Default for OptionRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tree() -> Vec<OptionDescriptor> {
		vec![
			OptionDescriptor::item("Apple"),
			OptionDescriptor::group(
				"Berries",
				vec![
					OptionDescriptor::item("Blueberry"),
					OptionDescriptor::group("Red", vec![OptionDescriptor::item("Raspberry")]),
					OptionDescriptor::Item {
						content: None,
						disabled: false,
					},
				],
			),
			OptionDescriptor::item("Cherry").disabled(),
		]
	}

	#[test]
	fn flatten_numbers_leaves_depth_first() {
		let records = flatten(&tree());
		let labels: Vec<_> = records.iter().map(|r| r.text().unwrap_or("?")).collect();
		assert_eq!(labels, ["Apple", "Blueberry", "Raspberry", "", "Cherry"]);
		for (position, record) in records.iter().enumerate() {
			assert_eq!(record.index, position);
		}
		assert!(records[4].is_disabled);
		assert!(!records[0].is_disabled);
	}

	#[test]
	fn empty_groups_contribute_nothing() {
		let options = vec![
			OptionDescriptor::group("Empty", Vec::new()),
			OptionDescriptor::item("Only"),
		];
		let records = flatten(&options);
		assert_eq!(records, vec![OptionRecord::new(0, "Only")]);
	}

	#[test]
	fn flattening_is_repeatable() {
		assert_eq!(flatten(&tree()), flatten(&tree()));
	}

	#[test]
	fn registry_reuses_records_for_the_same_collection() {
		let options: Arc<[OptionDescriptor]> = Arc::from(tree());
		let mut registry = OptionRegistry::new();

		let first = registry.records(&options);
		let second = registry.records(&options);
		assert!(Arc::ptr_eq(&first, &second));
	}

	#[test]
	fn registry_rebuilds_when_collection_identity_changes() {
		let mut registry = OptionRegistry::new();
		let first = registry.records(&Arc::from(tree()));
		let replacement: Arc<[OptionDescriptor]> = Arc::from(tree());
		let second = registry.records(&replacement);

		assert!(!Arc::ptr_eq(&first, &second));
		assert_eq!(first, second);
		assert_eq!(registry.cached().len(), 5);

		registry.invalidate();
		assert!(registry.cached().is_empty());
	}
}
