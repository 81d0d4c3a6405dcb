use msel::SelectConfig;

/// Application-ready configuration.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub select: SelectConfig,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration to stderr.
	pub fn print_summary(&self) {
		let select = &self.select;
		eprintln!("has_reset = {}", select.has_reset);
		eprintln!("is_disabled = {}", select.is_disabled);
		eprintln!("is_loading = {}", select.is_loading);
		eprintln!("responsive_mode = {}", select.responsive_mode.as_str());
		eprintln!("search_text = {:?}", select.search_text);
		eprintln!("selected = {:?}", select.selected_indices);
	}
}
