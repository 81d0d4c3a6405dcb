//! Tracing subscriber setup for the `msel` binary.
//!
//! The library only emits `tracing` events and never installs a subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `msel=debug`.
pub(crate) const LOG_ENV: &str = "MSEL_LOG";

/// Install a stderr subscriber. `MSEL_LOG` wins over `verbosity`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub(crate) fn initialize(verbosity: u8) {
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}
