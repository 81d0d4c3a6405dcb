use serde::Deserialize;

use msel::{ResponsiveMode, SelectConfig};

use super::errors::SettingsError;
use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	select: SelectSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SelectSection {
	has_reset: Option<bool>,
	is_disabled: Option<bool>,
	is_loading: Option<bool>,
	responsive_mode: Option<String>,
	search_text: Option<String>,
	selected: Option<Vec<usize>>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		let select = &mut self.select;
		if let Some(value) = cli.reset {
			select.has_reset = Some(value);
		}
		if let Some(value) = cli.disabled {
			select.is_disabled = Some(value);
		}
		if let Some(value) = cli.loading {
			select.is_loading = Some(value);
		}
		if let Some(mode) = cli.responsive {
			select.responsive_mode = Some(ResponsiveMode::from(mode).as_str().to_string());
		}
		if let Some(text) = cli.search.clone() {
			select.search_text = Some(text);
		}
		if let Some(indices) = cli.selected.clone() {
			select.selected = Some(indices);
		}
	}

	/// Validate values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig, SettingsError> {
		let SelectSection {
			has_reset,
			is_disabled,
			is_loading,
			responsive_mode,
			search_text,
			selected,
		} = self.select;

		let defaults = SelectConfig::default();
		let responsive_mode = match responsive_mode {
			Some(value) => parse_responsive_mode(&value)?,
			None => defaults.responsive_mode,
		};

		let select = SelectConfig {
			has_reset: has_reset.unwrap_or(defaults.has_reset),
			is_disabled: is_disabled.unwrap_or(defaults.is_disabled),
			is_loading: is_loading.unwrap_or(defaults.is_loading),
			search_text: search_text.unwrap_or(defaults.search_text),
			selected_indices: selected.unwrap_or(defaults.selected_indices),
			responsive_mode,
			option_filter: defaults.option_filter,
		};

		Ok(ResolvedConfig { select })
	}
}

fn parse_responsive_mode(value: &str) -> Result<ResponsiveMode, SettingsError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"small" => Ok(ResponsiveMode::Small),
		"large" => Ok(ResponsiveMode::Large),
		_ => Err(SettingsError::invalid(
			"responsive_mode",
			value,
			"expected \"small\" or \"large\"",
		)),
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn cli_overrides_take_precedence() {
		let cli = CliArgs::parse_from([
			"msel",
			"-",
			"--search",
			"berry",
			"--selected",
			"4",
			"--reset",
			"false",
			"--responsive",
			"small",
		]);

		let mut raw = RawConfig::default();
		raw.select.search_text = Some("file".into());
		raw.select.has_reset = Some(true);
		raw.apply_cli_overrides(&cli);

		let resolved = raw.resolve().expect("resolve");
		assert_eq!(resolved.select.search_text, "berry");
		assert_eq!(resolved.select.selected_indices, vec![4]);
		assert!(!resolved.select.has_reset);
		assert_eq!(resolved.select.responsive_mode, ResponsiveMode::Small);
	}

	#[test]
	fn empty_config_resolves_to_defaults() {
		let resolved = RawConfig::default().resolve().expect("resolve");
		let defaults = SelectConfig::default();
		assert_eq!(resolved.select.has_reset, defaults.has_reset);
		assert_eq!(resolved.select.is_loading, defaults.is_loading);
		assert_eq!(resolved.select.responsive_mode, defaults.responsive_mode);
		assert!(resolved.select.search_text.is_empty());
	}

	#[test]
	fn responsive_mode_is_case_insensitive() {
		assert_eq!(parse_responsive_mode(" Small "), Ok(ResponsiveMode::Small));
		assert_eq!(
			parse_responsive_mode("medium"),
			Err(SettingsError::invalid(
				"responsive_mode",
				"medium",
				"expected \"small\" or \"large\""
			))
		);
	}
}
