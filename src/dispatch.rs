//! Adapter from raw UI events to caller callbacks.
//!
//! Menu activation, checkbox changes and chip removals all collapse into one
//! [`SelectHandler::on_select`] call carrying the option index. The dispatcher
//! never decides whether that means select or deselect. Every callback also
//! receives the original event value, which the dispatcher never inspects.

use tracing::debug;

use crate::config::SelectConfig;
use crate::options::OptionRecord;
use crate::search::FilterError;
use crate::store::{Action, Intent, SelectionStore};

/// The menu collaborator.
pub trait Menu {
	fn expand(&mut self);
	fn collapse(&mut self);
}

/// Caller-facing callbacks. `E` is the host's low-level event type.
pub trait SelectHandler<E> {
	fn on_search(&mut self, search_text: &str, first_visible: Option<usize>, event: &E);
	fn on_select(&mut self, index: Option<usize>, event: &E);
	fn on_remove_all(&mut self, event: &E);
}

impl<M: Menu + ?Sized> Menu for &mut M {
	fn expand(&mut self) {
		(**self).expand();
	}

	fn collapse(&mut self) {
		(**self).collapse();
	}
}

impl<E, H: SelectHandler<E> + ?Sized> SelectHandler<E> for &mut H {
	fn on_search(&mut self, search_text: &str, first_visible: Option<usize>, event: &E) {
		(**self).on_search(search_text, first_visible, event);
	}

	fn on_select(&mut self, index: Option<usize>, event: &E) {
		(**self).on_select(index, event);
	}

	fn on_remove_all(&mut self, event: &E) {
		(**self).on_remove_all(event);
	}
}

/// Raw interaction as emitted by the menu, checkbox, chip and search input.
///
/// `callback_id` is the option index the collaborator was rendered with; it
/// is `None` when the collaborator did not supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEvent<E> {
	MenuActivate { callback_id: Option<usize>, event: E },
	CheckboxChange { callback_id: Option<usize>, event: E },
	ChipRemove { callback_id: Option<usize>, event: E },
	RemoveAllClick { event: E },
	SearchChange { text: String, event: E },
	SearchReset { event: E },
}

impl<E> RawEvent<E> {
	/// The originating low-level event.
	pub fn event(&self) -> &E {
		match self {
			Self::MenuActivate { event, .. }
			| Self::CheckboxChange { event, .. }
			| Self::ChipRemove { event, .. }
			| Self::RemoveAllClick { event }
			| Self::SearchChange { event, .. }
			| Self::SearchReset { event } => event,
		}
	}

	fn kind(&self) -> &'static str {
		match self {
			Self::MenuActivate { .. } => "menu_activate",
			Self::CheckboxChange { .. } => "checkbox_change",
			Self::ChipRemove { .. } => "chip_remove",
			Self::RemoveAllClick { .. } => "remove_all_click",
			Self::SearchChange { .. } => "search_change",
			Self::SearchReset { .. } => "search_reset",
		}
	}
}

/// Routes raw events through a [`SelectionStore`] to the caller.
pub struct EventDispatcher<'a, M, H> {
	config: &'a SelectConfig,
	store: SelectionStore<'a>,
	menu: M,
	handler: H,
}

impl<'a, M: Menu, H> EventDispatcher<'a, M, H> {
	#[must_use]
	pub fn new(records: &'a [OptionRecord], config: &'a SelectConfig, menu: M, handler: H) -> Self {
		Self {
			config,
			store: SelectionStore::for_config(records, config),
			menu,
			handler,
		}
	}

	/// Handle one raw event, returning the intent surfaced to the handler.
	///
	/// `Ok(None)` means the event was ignored: the control is disabled, a
	/// disabled option was activated from the menu, or a reset arrived while
	/// the reset affordance is turned off.
	///
	/// For search changes the menu is expanded before the handler is called.
	///
	/// # Errors
	///
	/// Propagates errors from the configured filter. The handler is not
	/// called and the menu is left untouched in that case.
	pub fn dispatch<E>(&mut self, raw: RawEvent<E>) -> Result<Option<Intent>, FilterError>
	where
		H: SelectHandler<E>,
	{
		if self.config.is_disabled {
			debug!(event = raw.kind(), "ignoring event on disabled control");
			return Ok(None);
		}

		let kind = raw.kind();
		let (action, event) = match raw {
			RawEvent::MenuActivate { callback_id, event } => {
				if self.is_disabled_option(callback_id) {
					debug!(index = ?callback_id, "ignoring activation of disabled option");
					return Ok(None);
				}
				(Action::Interact(callback_id), event)
			}
			RawEvent::CheckboxChange { callback_id, event }
			| RawEvent::ChipRemove { callback_id, event } => (Action::Interact(callback_id), event),
			RawEvent::RemoveAllClick { event } => (Action::RemoveAll, event),
			RawEvent::SearchChange { text, event } => (Action::Search(text), event),
			RawEvent::SearchReset { event } => {
				if !self.config.has_reset {
					debug!("ignoring reset without reset affordance");
					return Ok(None);
				}
				(Action::Search(String::new()), event)
			}
		};

		let intent = self.store.reduce(action)?;
		debug!(event = kind, ?intent, "dispatching intent");
		self.surface(&intent, &event);
		Ok(Some(intent))
	}

	fn surface<E>(&mut self, intent: &Intent, event: &E)
	where
		H: SelectHandler<E>,
	{
		match intent {
			Intent::Select { index } => self.handler.on_select(*index, event),
			Intent::RemoveAll => self.handler.on_remove_all(event),
			Intent::Search {
				text,
				first_visible,
			} => {
				self.menu.expand();
				self.handler.on_search(text, *first_visible, event);
			}
		}
	}

	fn is_disabled_option(&self, index: Option<usize>) -> bool {
		index
			.and_then(|index| self.store.records().get(index))
			.is_some_and(|record| record.is_disabled)
	}

	/// Close the menu, e.g. when focus leaves the control.
	pub fn collapse_menu(&mut self) {
		self.menu.collapse();
	}

	#[must_use]
	pub fn store(&self) -> SelectionStore<'a> {
		self.store
	}

	pub fn menu_mut(&mut self) -> &mut M {
		&mut self.menu
	}

	pub fn handler_mut(&mut self) -> &mut H {
		&mut self.handler
	}

	#[must_use]
	pub fn into_parts(self) -> (M, H) {
		(self.menu, self.handler)
	}
}
