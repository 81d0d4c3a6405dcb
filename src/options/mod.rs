//! Option descriptors supplied by the host and the flat, index-addressed
//! record list derived from them.
//!
//! Hosts describe their options as a tree of [`OptionDescriptor`] values where
//! groups only exist for presentation. [`flatten`] walks that tree depth-first
//! and assigns every leaf a stable zero-based index; [`OptionRegistry`] caches
//! the result for as long as the same options collection is in use.

mod descriptor;
mod registry;

pub use descriptor::{OptionContent, OptionDescriptor};
pub use registry::{OptionRecord, OptionRegistry, flatten};
