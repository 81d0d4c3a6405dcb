//! Configuration loading for the `msel` binary.
//!
//! Values are layered as: default config files, explicit `--config` files,
//! `MSEL__*` environment variables, then command line flags. `load` returns
//! the [`ResolvedConfig`] used by the workflow.

mod errors;
mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
