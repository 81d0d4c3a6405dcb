use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	Ok(raw.resolve()?)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;
	use msel::ResponsiveMode;

	#[test]
	fn explicit_config_file_is_merged_under_cli_flags() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("select.toml");
		fs::write(
			&path,
			"[select]\nis_loading = true\nresponsive_mode = \"small\"\nsearch_text = \"from file\"\nselected = [3, 1]\n",
		)
		.expect("write config");

		let cli = CliArgs::parse_from([
			"msel",
			"-",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
			"--search",
			"from cli",
		]);

		let resolved = load(&cli).expect("load");
		assert!(resolved.select.is_loading);
		assert_eq!(resolved.select.responsive_mode, ResponsiveMode::Small);
		assert_eq!(resolved.select.search_text, "from cli");
		assert_eq!(resolved.select.selected_indices, vec![3, 1]);
		assert!(resolved.select.has_reset);
	}

	#[test]
	fn invalid_responsive_mode_is_rejected() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("select.toml");
		fs::write(&path, "[select]\nresponsive_mode = \"tiny\"\n").expect("write config");

		let cli = CliArgs::parse_from([
			"msel",
			"-",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);

		let err = load(&cli).expect_err("invalid mode");
		assert!(err.to_string().contains("responsive_mode"));
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"msel",
			"-",
			"--no-config",
			"--config",
			"/definitely/not/here/msel.toml",
		]);
		assert!(load(&cli).is_err());
	}
}
