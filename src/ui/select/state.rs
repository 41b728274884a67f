// SPDX-License-Identifier: MPL-2.0
//! Open/close, search and focus handling of the select.
//!
//! The selected value is not stored here: callers own it and pass it to the
//! view. Picking an option only proposes a new value through
//! [`Effect::Changed`].

use super::option::{self, SelectOption};
use iced::keyboard::{self, key::Named};
use iced::widget::{operation, Id};
use iced::Task;

/// Whether the option list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

/// Messages emitted by the select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The trigger was pressed.
    TriggerPressed,
    /// An option row was pressed, carrying its value.
    OptionPressed(String),
    /// The search field content changed.
    SearchChanged(String),
    /// A pointer went down outside the control.
    OutsidePressed,
    /// A key was pressed somewhere in the window.
    KeyPressed(keyboard::Key),
}

/// Outcome of an update the caller has to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user picked the option with this value.
    Changed(String),
}

/// Caller-owned properties that affect how messages are handled.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext<'a> {
    pub options: &'a [SelectOption],
    pub disabled: bool,
    pub searchable: bool,
}

/// View state of one select.
#[derive(Debug, Clone)]
pub struct State {
    open: OpenState,
    search: String,
    focused: bool,
    search_id: Id,
}

impl Default for State {
    fn default() -> Self {
        Self {
            open: OpenState::Closed,
            search: String::new(),
            focused: false,
            search_id: Id::unique(),
        }
    }
}

impl State {
    /// Creates a closed, unfocused select state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn open_state(&self) -> OpenState {
        self.open
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open == OpenState::Open
    }

    /// Current search term; empty when no filter applies.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Whether key presses are routed to this select.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Identifier of the search field, for focus operations.
    #[must_use]
    pub fn search_input_id(&self) -> &Id {
        &self.search_id
    }

    /// Handles a message and returns the effect for the caller together with
    /// any follow-up task (focusing the search field after opening).
    pub fn update(&mut self, message: Message, ctx: UpdateContext<'_>) -> (Effect, Task<Message>) {
        if ctx.disabled {
            // A control disabled while open must not stay open or focused.
            self.close();
            self.focused = false;
            return (Effect::None, Task::none());
        }

        match message {
            Message::TriggerPressed => {
                self.focused = true;
                let task = self.toggle(ctx.searchable);
                (Effect::None, task)
            }
            Message::OptionPressed(value) => (self.select(&value, ctx.options), Task::none()),
            Message::SearchChanged(term) => {
                if self.is_open() && ctx.searchable {
                    self.search = term;
                }
                (Effect::None, Task::none())
            }
            Message::OutsidePressed => {
                self.focused = false;
                self.close();
                (Effect::None, Task::none())
            }
            Message::KeyPressed(key) => {
                let task = self.handle_key(&key, ctx.searchable);
                (Effect::None, task)
            }
        }
    }

    /// Options visible for the current search term.
    pub fn visible_options<'a>(&self, options: &'a [SelectOption]) -> Vec<&'a SelectOption> {
        option::filter(options, &self.search)
    }

    fn handle_key(&mut self, key: &keyboard::Key, searchable: bool) -> Task<Message> {
        if !self.focused {
            return Task::none();
        }

        if matches!(key, keyboard::Key::Named(Named::Escape)) {
            self.close();
            return Task::none();
        }

        // Keyboard focus moves on.
        if matches!(key, keyboard::Key::Named(Named::Tab)) {
            self.focused = false;
            self.close();
            return Task::none();
        }

        // The search field owns every other key while it is shown.
        if self.is_open() && searchable {
            return Task::none();
        }

        match key {
            keyboard::Key::Named(Named::Enter | Named::Space) => self.toggle(searchable),
            keyboard::Key::Character(c) if c.as_str() == " " => self.toggle(searchable),
            keyboard::Key::Named(Named::ArrowDown) if !self.is_open() => self.open(searchable),
            keyboard::Key::Named(Named::ArrowUp) => {
                self.close();
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn select(&mut self, value: &str, options: &[SelectOption]) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }

        match option::find(options, value) {
            Some(option) if !option.disabled => {
                tracing::debug!(value = %option.value, "select option picked");
                self.close();
                Effect::Changed(option.value.clone())
            }
            Some(_) => {
                tracing::trace!(value, "ignoring press on disabled option");
                Effect::None
            }
            None => {
                tracing::trace!(value, "ignoring press on unknown option");
                Effect::None
            }
        }
    }

    fn toggle(&mut self, searchable: bool) -> Task<Message> {
        if self.is_open() {
            self.close();
            Task::none()
        } else {
            self.open(searchable)
        }
    }

    fn open(&mut self, searchable: bool) -> Task<Message> {
        self.open = OpenState::Open;
        tracing::debug!(searchable, "select opened");
        if searchable {
            operation::focus(self.search_id.clone())
        } else {
            Task::none()
        }
    }

    fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("select closed");
        }
        self.open = OpenState::Closed;
        self.search.clear();
    }
}
