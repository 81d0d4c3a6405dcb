use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content displayed for an option.
///
/// Only [`OptionContent::Text`] takes part in the default search and in
/// highlighting. [`OptionContent::Node`] carries host-defined markup that the
/// core never inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionContent {
	Text(String),
	Node(Value),
}

impl OptionContent {
	/// Return the textual content, if any.
	#[must_use]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Node(_) => None,
		}
	}

	#[must_use]
	pub fn is_text(&self) -> bool {
		matches!(self, Self::Text(_))
	}
}

impl Default for OptionContent {
	fn default() -> Self {
		Self::Text(String::new())
	}
}

impl From<&str> for OptionContent {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for OptionContent {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

/// A node in the host's option tree.
///
/// Serialized form is tagged by `kind`; a bare JSON string is accepted as
/// shorthand for an enabled text item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DescriptorRepr", tag = "kind", rename_all = "snake_case")]
pub enum OptionDescriptor {
	/// A selectable leaf. Missing content still yields a record.
	Item {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		content: Option<OptionContent>,
		#[serde(default)]
		disabled: bool,
	},
	/// Presentation-only grouping; contributes no index of its own.
	Group {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		label: Option<String>,
		#[serde(default)]
		children: Vec<OptionDescriptor>,
	},
}

impl OptionDescriptor {
	/// Create an enabled item with the given content.
	#[must_use]
	pub fn item(content: impl Into<OptionContent>) -> Self {
		Self::Item {
			content: Some(content.into()),
			disabled: false,
		}
	}

	/// Create an item whose content is an opaque host node.
	#[must_use]
	pub fn node(value: Value) -> Self {
		Self::Item {
			content: Some(OptionContent::Node(value)),
			disabled: false,
		}
	}

	/// Create a group wrapping `children`.
	#[must_use]
	pub fn group(label: impl Into<String>, children: Vec<OptionDescriptor>) -> Self {
		Self::Group {
			label: Some(label.into()),
			children,
		}
	}

	/// Mark an item as disabled. Groups are returned unchanged.
	#[must_use]
	pub fn disabled(self) -> Self {
		match self {
			Self::Item { content, .. } => Self::Item {
				content,
				disabled: true,
			},
			group @ Self::Group { .. } => group,
		}
	}
}

impl From<&str> for OptionDescriptor {
	fn from(text: &str) -> Self {
		Self::item(text)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorRepr {
	Label(String),
	Tagged(TaggedDescriptor),
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TaggedDescriptor {
	#[serde(alias = "option")]
	Item {
		#[serde(default)]
		content: Option<OptionContent>,
		#[serde(default)]
		disabled: bool,
	},
	Group {
		#[serde(default)]
		label: Option<String>,
		#[serde(default)]
		children: Vec<OptionDescriptor>,
	},
}

impl From<DescriptorRepr> for OptionDescriptor {
	fn from(repr: DescriptorRepr) -> Self {
		match repr {
			DescriptorRepr::Label(text) => Self::item(text),
			DescriptorRepr::Tagged(TaggedDescriptor::Item { content, disabled }) => {
				Self::Item { content, disabled }
			}
			DescriptorRepr::Tagged(TaggedDescriptor::Group { label, children }) => {
				Self::Group { label, children }
			}
		}
	}
}
