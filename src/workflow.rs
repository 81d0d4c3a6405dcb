use std::fs;
use std::io::{self, Read};
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use msel::{
	EventDispatcher, FilterError, Intent, Menu, OptionDescriptor, OptionRecord, OptionRegistry,
	RawEvent, SelectConfig, SelectHandler, SelectView, SelectionStore,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::settings::ResolvedConfig;

/// One scripted interaction from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScriptedEvent {
	/// A raw control event; the payload is the original token.
	Dispatch(RawEvent<String>),
	/// Focus left the control.
	Close,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ScriptError {
	#[error("unknown event `{0}`")]
	Unknown(String),
	#[error("invalid option index in `{token}`: {source}")]
	InvalidIndex {
		token: String,
		#[source]
		source: ParseIntError,
	},
}

impl FromStr for ScriptedEvent {
	type Err = ScriptError;

	fn from_str(token: &str) -> Result<Self, Self::Err> {
		let (name, argument) = match token.split_once('=') {
			Some((name, argument)) => (name.trim(), Some(argument)),
			None => (token.trim(), None),
		};
		let event = token.to_string();

		let raw = match (name, argument) {
			("search", text) => RawEvent::SearchChange {
				text: text.unwrap_or_default().to_string(),
				event,
			},
			("activate", argument) => RawEvent::MenuActivate {
				callback_id: parse_index(token, argument)?,
				event,
			},
			("toggle", argument) => RawEvent::CheckboxChange {
				callback_id: parse_index(token, argument)?,
				event,
			},
			("chip", argument) => RawEvent::ChipRemove {
				callback_id: parse_index(token, argument)?,
				event,
			},
			("remove-all", None) => RawEvent::RemoveAllClick { event },
			("reset", None) => RawEvent::SearchReset { event },
			("close", None) => return Ok(Self::Close),
			_ => return Err(ScriptError::Unknown(token.to_string())),
		};

		Ok(Self::Dispatch(raw))
	}
}

/// A missing or empty argument means the collaborator supplied no id.
fn parse_index(token: &str, argument: Option<&str>) -> Result<Option<usize>, ScriptError> {
	match argument.map(str::trim) {
		None | Some("") => Ok(None),
		Some(value) => value
			.parse()
			.map(Some)
			.map_err(|source| ScriptError::InvalidIndex {
				token: token.to_string(),
				source,
			}),
	}
}

#[derive(Debug, Default)]
struct MenuState {
	expanded: bool,
}

impl Menu for MenuState {
	fn expand(&mut self) {
		self.expanded = true;
	}

	fn collapse(&mut self) {
		self.expanded = false;
	}
}

/// The owner of search text and selection. Selection events toggle.
#[derive(Debug)]
struct Caller {
	search_text: String,
	selected: Vec<usize>,
}

impl Caller {
	fn from_config(config: &SelectConfig) -> Self {
		Self {
			search_text: config.search_text.clone(),
			selected: config.selected_indices.clone(),
		}
	}

	fn apply_to(&self, config: &mut SelectConfig) {
		config.search_text.clone_from(&self.search_text);
		config.selected_indices.clone_from(&self.selected);
	}
}

impl SelectHandler<String> for Caller {
	fn on_search(&mut self, search_text: &str, first_visible: Option<usize>, event: &String) {
		debug!(%event, ?first_visible, "search changed");
		self.search_text = search_text.to_string();
	}

	fn on_select(&mut self, index: Option<usize>, event: &String) {
		let Some(index) = index else {
			debug!(%event, "selection without an option index");
			return;
		};

		match self.selected.iter().position(|selected| *selected == index) {
			Some(position) => {
				self.selected.remove(position);
			}
			None => self.selected.push(index),
		}
	}

	fn on_remove_all(&mut self, event: &String) {
		debug!(%event, "removing all selections");
		self.selected.clear();
	}
}

/// A replayed event and what it produced. `intent` is `None` when the event
/// was ignored or only touched the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step {
	pub(crate) event: String,
	pub(crate) intent: Option<Intent>,
}

/// State after replaying every scripted event.
pub(crate) struct SelectOutcome {
	pub(crate) records: Arc<[OptionRecord]>,
	pub(crate) config: SelectConfig,
	pub(crate) menu_expanded: bool,
	pub(crate) steps: Vec<Step>,
}

impl SelectOutcome {
	/// View for the final inputs.
	pub(crate) fn view(&self) -> Result<SelectView<'_>, FilterError> {
		SelectionStore::for_config(&self.records, &self.config).view(&self.config)
	}
}

/// Replays scripted events against one options document.
pub(crate) struct SelectWorkflow {
	options: Arc<[OptionDescriptor]>,
	config: SelectConfig,
	script: Vec<(String, ScriptedEvent)>,
}

impl SelectWorkflow {
	pub(crate) fn from_cli(cli: &CliArgs, settings: ResolvedConfig) -> Result<Self> {
		let options = read_options(&cli.options)?;
		Self::new(options, settings.select, &cli.events)
	}

	pub(crate) fn new<S: AsRef<str>>(
		options: Arc<[OptionDescriptor]>,
		config: SelectConfig,
		events: &[S],
	) -> Result<Self> {
		let script = events
			.iter()
			.map(|token| -> Result<(String, ScriptedEvent)> {
				let token = token.as_ref();
				Ok((token.to_string(), token.parse::<ScriptedEvent>()?))
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Self {
			options,
			config,
			script,
		})
	}

	pub(crate) fn run(self) -> Result<SelectOutcome> {
		let Self {
			options,
			mut config,
			script,
		} = self;

		let mut registry = OptionRegistry::new();
		let records = registry.records(&options);
		info!(options = records.len(), events = script.len(), "replaying events");

		let mut menu = MenuState::default();
		let mut caller = Caller::from_config(&config);
		let mut steps = Vec::with_capacity(script.len());

		for (token, scripted) in script {
			let intent = {
				let mut dispatcher = EventDispatcher::new(&records, &config, &mut menu, &mut caller);
				match scripted {
					ScriptedEvent::Dispatch(raw) => dispatcher
						.dispatch(raw)
						.with_context(|| format!("failed to dispatch `{token}`"))?,
					ScriptedEvent::Close => {
						dispatcher.collapse_menu();
						None
					}
				}
			};
			caller.apply_to(&mut config);
			steps.push(Step {
				event: token,
				intent,
			});
		}

		Ok(SelectOutcome {
			records,
			config,
			menu_expanded: menu.expanded,
			steps,
		})
	}
}

fn read_options(path: &Path) -> Result<Arc<[OptionDescriptor]>> {
	let source = if path == Path::new("-") {
		let mut buffer = String::new();
		io::stdin()
			.read_to_string(&mut buffer)
			.context("failed to read options from stdin")?;
		buffer
	} else {
		fs::read_to_string(path)
			.with_context(|| format!("failed to read options from {}", path.display()))?
	};

	let options: Vec<OptionDescriptor> =
		serde_json::from_str(&source).context("options must be a JSON array of descriptors")?;
	Ok(options.into())
}
