//! Literal, case-insensitive option matching.

mod filter;
mod fold;
mod visibility;

pub use filter::{DefaultFilter, Fallible, FilterError, OptionFilter, fallible};
pub use fold::find_ignore_case;
pub use visibility::Visibility;
