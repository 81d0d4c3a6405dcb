//! Logic core for searchable multi-select controls.
//!
//! The crate turns a tree of option descriptors into stable, index-addressed
//! records ([`options`]), decides which of them match the current search text
//! ([`search`]), splits matched text for highlighting ([`highlight`]), and
//! reduces raw user interactions into intents for a caller that owns the
//! selection ([`store`], [`dispatch`]). The [`render`] module turns the
//! computed view into ratatui lines.

pub mod app_dirs;
pub mod config;
pub mod dispatch;
pub mod highlight;
pub mod options;
pub mod render;
pub mod search;
pub mod store;

pub use config::{ResponsiveMode, SelectConfig};
pub use dispatch::{EventDispatcher, Menu, RawEvent, SelectHandler};
pub use highlight::{Highlight, OwnedHighlight, Segment, TruncationStyle, partition};
pub use options::{OptionContent, OptionDescriptor, OptionRecord, OptionRegistry, flatten};
pub use search::{DefaultFilter, FilterError, OptionFilter, Visibility, fallible};
pub use store::{
	Action, Chip, Intent, MenuItem, MenuModel, NOT_FOUND, NoResults, SelectView, SelectionStore,
};
