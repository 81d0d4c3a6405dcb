//! Split option text around the first occurrence of the search text.

use std::ops::Range;

use serde::Serialize;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::search::find_ignore_case;

const ELLIPSIS: &str = "…";

/// Text split into the part before the first match, the match, and the rest.
///
/// `prefix + matched + suffix` always reproduces the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight<'a> {
	pub prefix: &'a str,
	pub matched: &'a str,
	pub suffix: &'a str,
}

/// A non-empty piece of a [`Highlight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
	pub text: &'a str,
	pub highlighted: bool,
}

/// Which end of the text to drop when it does not fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TruncationStyle {
	Left,
	#[default]
	Right,
}

/// Partition `text` around the first case-insensitive, literal occurrence of
/// `search_text`. Without a match the whole text lands in the prefix.
#[must_use]
pub fn partition<'a>(text: &'a str, search_text: &str) -> Highlight<'a> {
	let unmatched = Highlight {
		prefix: text,
		matched: "",
		suffix: "",
	};
	if search_text.is_empty() {
		return unmatched;
	}

	match find_ignore_case(text, search_text) {
		Some(range) => Highlight {
			prefix: &text[..range.start],
			matched: &text[range.clone()],
			suffix: &text[range.end..],
		},
		None => unmatched,
	}
}

impl<'a> Highlight<'a> {
	#[must_use]
	pub fn is_match(&self) -> bool {
		!self.matched.is_empty()
	}

	/// Non-empty segments in display order.
	pub fn segments(&self) -> impl Iterator<Item = Segment<'a>> + use<'a> {
		[
			Segment {
				text: self.prefix,
				highlighted: false,
			},
			Segment {
				text: self.matched,
				highlighted: true,
			},
			Segment {
				text: self.suffix,
				highlighted: false,
			},
		]
		.into_iter()
		.filter(|segment| !segment.text.is_empty())
	}

	#[must_use]
	pub fn width(&self) -> usize {
		self.prefix.width() + self.matched.width() + self.suffix.width()
	}

	/// Fit the highlight into `max_width` display columns, marking each
	/// dropped end with an ellipsis. The ellipsis is never highlighted.
	///
	/// `style` picks the end to drop first. The kept window always contains
	/// the match: the other end is dropped instead, then both ends around
	/// the match. Only a match wider than the whole budget is cut itself.
	#[must_use]
	pub fn truncate(&self, max_width: usize, style: TruncationStyle) -> OwnedHighlight {
		if self.width() <= max_width {
			return OwnedHighlight::from(*self);
		}
		if max_width == 0 {
			return OwnedHighlight::default();
		}

		let ellipsis_width = ELLIPSIS.width();
		if max_width <= ellipsis_width {
			return OwnedHighlight {
				prefix: ELLIPSIS.to_string(),
				..OwnedHighlight::default()
			};
		}

		let text = [self.prefix, self.matched, self.suffix].concat();
		let start = self.prefix.len();
		let window = Window {
			text: &text,
			matched: start..start + self.matched.len(),
		};
		let available = max_width - ellipsis_width;

		if !self.is_match() {
			return match style {
				TruncationStyle::Right => window.head(available),
				TruncationStyle::Left => window.tail(available),
			};
		}

		let (first, second) = match style {
			TruncationStyle::Right => (window.head_with_match(available), window.tail_with_match(available)),
			TruncationStyle::Left => (window.tail_with_match(available), window.head_with_match(available)),
		};
		first
			.or(second)
			.or_else(|| window.around_match(max_width, ellipsis_width))
			.unwrap_or_else(|| window.inside_match(available, style))
	}
}

/// Owned counterpart of [`Highlight`], produced by truncation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OwnedHighlight {
	pub prefix: String,
	pub matched: String,
	pub suffix: String,
}

impl OwnedHighlight {
	#[must_use]
	pub fn as_highlight(&self) -> Highlight<'_> {
		Highlight {
			prefix: &self.prefix,
			matched: &self.matched,
			suffix: &self.suffix,
		}
	}
}

impl From<Highlight<'_>> for OwnedHighlight {
	fn from(highlight: Highlight<'_>) -> Self {
		Self {
			prefix: highlight.prefix.to_string(),
			matched: highlight.matched.to_string(),
			suffix: highlight.suffix.to_string(),
		}
	}
}

/// Byte offsets of the match within the joined text.
struct Window<'t> {
	text: &'t str,
	matched: Range<usize>,
}

impl Window<'_> {
	fn head(&self, available: usize) -> OwnedHighlight {
		let (slice, _) = self.text.unicode_truncate(available);
		self.split(0..slice.len(), false, true)
	}

	fn tail(&self, available: usize) -> OwnedHighlight {
		let (slice, _) = self.text.unicode_truncate_start(available);
		self.split(self.text.len() - slice.len()..self.text.len(), true, false)
	}

	fn head_with_match(&self, available: usize) -> Option<OwnedHighlight> {
		let (slice, _) = self.text.unicode_truncate(available);
		(slice.len() >= self.matched.end).then(|| self.split(0..slice.len(), false, true))
	}

	fn tail_with_match(&self, available: usize) -> Option<OwnedHighlight> {
		let (slice, _) = self.text.unicode_truncate_start(available);
		let start = self.text.len() - slice.len();
		(start <= self.matched.start).then(|| self.split(start..self.text.len(), true, false))
	}

	/// Both ends dropped, context shared evenly around the match.
	fn around_match(&self, max_width: usize, ellipsis_width: usize) -> Option<OwnedHighlight> {
		let budget = max_width.checked_sub(2 * ellipsis_width)?;
		let remaining = budget.checked_sub(self.text[self.matched.clone()].width())?;

		let before = &self.text[..self.matched.start];
		let after = &self.text[self.matched.end..];
		let (lead, _) = before.unicode_truncate_start(remaining / 2);
		let (trail, _) = after.unicode_truncate(remaining - lead.width());
		let (lead, _) = before.unicode_truncate_start(remaining - trail.width());

		let window = self.matched.start - lead.len()..self.matched.end + trail.len();
		Some(self.split(window, true, true))
	}

	fn inside_match(&self, available: usize, style: TruncationStyle) -> OwnedHighlight {
		let matched = &self.text[self.matched.clone()];
		match style {
			TruncationStyle::Right => {
				let (slice, _) = matched.unicode_truncate(available);
				self.split(self.matched.start..self.matched.start + slice.len(), false, true)
			}
			TruncationStyle::Left => {
				let (slice, _) = matched.unicode_truncate_start(available);
				self.split(self.matched.end - slice.len()..self.matched.end, true, false)
			}
		}
	}

	/// Clamp the match to `window` and attach the requested ellipses.
	fn split(&self, window: Range<usize>, lead: bool, trail: bool) -> OwnedHighlight {
		let start = self.matched.start.clamp(window.start, window.end);
		let end = self.matched.end.clamp(start, window.end);

		let mut prefix = String::new();
		if lead {
			prefix.push_str(ELLIPSIS);
		}
		prefix.push_str(&self.text[window.start..start]);

		let mut suffix = self.text[end..window.end].to_string();
		if trail {
			suffix.push_str(ELLIPSIS);
		}

		OwnedHighlight {
			prefix,
			matched: self.text[start..end].to_string(),
			suffix,
		}
	}
}
