use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		BoolishValueParser, Styles,
		styling::{AnsiColor, Effects},
	},
};
use msel::{ResponsiveMode, app_dirs};

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("msel {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "msel",
	version,
	long_version = long_version(),
	about = "Evaluate a searchable multi-select against an options document",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `msel` binary.
pub(crate) struct CliArgs {
	#[arg(
		value_name = "OPTIONS",
		help = "JSON array of option descriptors, or '-' to read stdin"
	)]
	pub(crate) options: PathBuf,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MSEL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 's',
		long = "search",
		value_name = "TEXT",
		help = "Search text to evaluate (default: empty)"
	)]
	pub(crate) search: Option<String>,
	#[arg(
		long = "selected",
		value_delimiter = ',',
		value_name = "INDEX",
		help = "Comma-separated selected option indices (default: none)"
	)]
	pub(crate) selected: Option<Vec<usize>>,
	#[arg(
		long = "disabled",
		value_parser = BoolishValueParser::new(),
		help = "Disable the whole control (default: disabled)"
	)]
	pub(crate) disabled: Option<bool>,
	#[arg(
		long = "loading",
		value_parser = BoolishValueParser::new(),
		help = "Show the loading indicator (default: disabled)"
	)]
	pub(crate) loading: Option<bool>,
	#[arg(
		long = "reset",
		value_parser = BoolishValueParser::new(),
		help = "Offer the search reset affordance (default: enabled)"
	)]
	pub(crate) reset: Option<bool>,
	#[arg(
		short = 'r',
		long = "responsive",
		value_enum,
		help = "Selection summary layout (default: large)"
	)]
	pub(crate) responsive: Option<ResponsiveArg>,
	#[arg(
		short = 'e',
		long = "event",
		value_name = "EVENT",
		action = ArgAction::Append,
		help = "Replay an interaction: search=TEXT, activate=N, toggle=N, chip=N, remove-all, reset, close"
	)]
	pub(crate) events: Vec<String>,
	#[arg(
		short = 'w',
		long = "chip-width",
		value_name = "COLUMNS",
		default_value_t = 24,
		help = "Maximum width of a selection chip"
	)]
	pub(crate) chip_width: usize,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity; MSEL_LOG overrides"
	)]
	pub(crate) verbose: u8,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Responsive modes accepted via the command line.
pub(crate) enum ResponsiveArg {
	Small,
	Large,
}

impl From<ResponsiveArg> for ResponsiveMode {
	fn from(arg: ResponsiveArg) -> Self {
		match arg {
			ResponsiveArg::Small => ResponsiveMode::Small,
			ResponsiveArg::Large => ResponsiveMode::Large,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
