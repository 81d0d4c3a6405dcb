use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::options::OptionRecord;

use super::find_ignore_case;

/// Predicate deciding whether an option is visible under the current search.
///
/// Any `Fn(&str, &OptionRecord) -> bool` closure is a filter. Filters that can
/// fail are wrapped with [`fallible`]; their errors reach the caller untouched.
pub trait OptionFilter: Send + Sync {
	fn matches(&self, search_text: &str, option: &OptionRecord) -> Result<bool, FilterError>;
}

/// Case-insensitive literal substring match against textual content.
///
/// Empty search text matches every textual option. Opaque nodes never match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultFilter;

impl DefaultFilter {
	#[must_use]
	pub fn is_match(search_text: &str, option: &OptionRecord) -> bool {
		option
			.text()
			.is_some_and(|text| find_ignore_case(text, search_text).is_some())
	}
}

impl OptionFilter for DefaultFilter {
	fn matches(&self, search_text: &str, option: &OptionRecord) -> Result<bool, FilterError> {
		Ok(Self::is_match(search_text, option))
	}
}

impl<F> OptionFilter for F
where
	F: Fn(&str, &OptionRecord) -> bool + Send + Sync,
{
	fn matches(&self, search_text: &str, option: &OptionRecord) -> Result<bool, FilterError> {
		Ok(self(search_text, option))
	}
}

/// Adapter for filters returning `Result`. Built with [`fallible`].
#[derive(Clone, Copy)]
pub struct Fallible<F>(F);

/// Wrap a filter that may fail.
pub fn fallible<F, E>(filter: F) -> Fallible<F>
where
	F: Fn(&str, &OptionRecord) -> Result<bool, E> + Send + Sync,
	E: StdError + Send + Sync + 'static,
{
	Fallible(filter)
}

impl<F, E> OptionFilter for Fallible<F>
where
	F: Fn(&str, &OptionRecord) -> Result<bool, E> + Send + Sync,
	E: StdError + Send + Sync + 'static,
{
	fn matches(&self, search_text: &str, option: &OptionRecord) -> Result<bool, FilterError> {
		(self.0)(search_text, option).map_err(FilterError::new)
	}
}

impl<F> fmt::Debug for Fallible<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Fallible(..)")
	}
}

/// Failure raised by a caller-supplied filter.
///
/// Displays as, and exposes the source of, the wrapped error. The original
/// value is recoverable through [`FilterError::into_inner`] or
/// [`FilterError::downcast_ref`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct FilterError(Box<dyn StdError + Send + Sync + 'static>);

impl FilterError {
	pub fn new(error: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
		Self(error.into())
	}

	#[must_use]
	pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
		self.0
	}

	#[must_use]
	pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
		self.0.downcast_ref::<T>()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::OptionContent;

	#[test]
	fn default_filter_ignores_case() {
		let record = OptionRecord::new(0, "say hello now");
		assert!(DefaultFilter.matches("HELLO", &record).expect("filter"));
		assert!(!DefaultFilter.matches("goodbye", &record).expect("filter"));
	}

	#[test]
	fn empty_search_matches_text_but_not_nodes() {
		let text = OptionRecord::new(0, "");
		let node = OptionRecord::new(1, OptionContent::Node(serde_json::json!({"tag": "b"})));
		assert!(DefaultFilter::is_match("", &text));
		assert!(!DefaultFilter::is_match("", &node));
		assert!(!DefaultFilter::is_match("tag", &node));
	}

	#[test]
	fn closures_act_as_filters() {
		let prefix = |search: &str, option: &OptionRecord| {
			option.text().is_some_and(|text| text.starts_with(search))
		};
		let record = OptionRecord::new(0, "Banana");
		assert!(prefix.matches("Ban", &record).expect("filter"));
		assert!(!prefix.matches("ana", &record).expect("filter"));
	}

	#[derive(Debug, Error, PartialEq)]
	#[error("lookup table unavailable")]
	struct LookupFailed;

	#[test]
	fn fallible_filter_errors_are_preserved() {
		let filter = fallible(|_: &str, _: &OptionRecord| Err::<bool, _>(LookupFailed));
		let err = filter
			.matches("x", &OptionRecord::new(0, "x"))
			.expect_err("filter fails");
		assert_eq!(err.to_string(), "lookup table unavailable");
		assert_eq!(err.downcast_ref::<LookupFailed>(), Some(&LookupFailed));
		assert!(err.into_inner().downcast::<LookupFailed>().is_ok());
	}

	#[derive(Debug, Error)]
	#[error("ranking service failed")]
	struct RankingFailed(#[source] LookupFailed);

	#[test]
	fn filter_error_is_transparent_over_the_wrapped_error() {
		let err = FilterError::new(RankingFailed(LookupFailed));
		assert_eq!(err.to_string(), "ranking service failed");
		let source = err.source().expect("source is forwarded");
		assert_eq!(source.to_string(), "lookup table unavailable");
	}
}
