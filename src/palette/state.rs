//! Command palette overlay state: query, selection and execution.

use tracing::{debug, info};

use super::catalog::{CommandAction, CommandDescriptor, CommandHandler};
use super::matcher::{match_commands, MatchResult};
use super::query_store::QueryStore;
use crate::error::{ResultExt, TermfolioError};
use crate::keymap::{Key, KeyEvent};

#[derive(Debug)]
pub struct CommandPalette {
    commands: Vec<CommandDescriptor>,
    query: String,
    selected: usize,
    open: bool,
    store: Option<QueryStore>,
}

impl CommandPalette {
    pub fn new(commands: Vec<CommandDescriptor>) -> Self {
        CommandPalette {
            commands,
            query: String::new(),
            selected: 0,
            open: false,
            store: None,
        }
    }

    /// Palette that restores its last non-empty query from `store` now and
    /// remembers every later non-empty query there.
    pub fn with_store(commands: Vec<CommandDescriptor>, store: QueryStore) -> Self {
        let query = store.load().warn_on_err().flatten().unwrap_or_default();
        if !query.is_empty() {
            debug!(query = %query, "Restored palette query");
        }
        CommandPalette {
            query,
            store: Some(store),
            ..CommandPalette::new(commands)
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Swap in a rebuilt command list, e.g. after the theme changed.
    pub fn set_commands(&mut self, commands: Vec<CommandDescriptor>) {
        self.commands = commands;
        let len = self.matches().len();
        if self.selected >= len {
            self.selected = 0;
        }
    }

    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text and reset the selection to the top result.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = 0;
        if self.query.is_empty() {
            return;
        }
        if let Some(store) = &self.store {
            store.save(&self.query).warn_on_err();
        }
    }

    pub fn matches(&self) -> Vec<MatchResult<'_>> {
        match_commands(&self.commands, &self.query)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_command(&self) -> Option<&CommandDescriptor> {
        self.matches().get(self.selected).map(|m| m.command)
    }

    pub fn select_next(&mut self) {
        let len = self.matches().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.matches().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Run the highlighted command. Returns the action that ran, if any.
    pub fn execute_selected(&mut self, handler: &mut impl CommandHandler) -> Option<CommandAction> {
        let command = self.selected_command()?;
        let (id, action) = (command.id.clone(), command.action);
        self.run(&id, action, handler);
        Some(action)
    }

    /// Run the command with `id`, whether or not it matches the current query.
    pub fn execute(
        &mut self,
        id: &str,
        handler: &mut impl CommandHandler,
    ) -> Result<CommandAction, TermfolioError> {
        let action = self
            .commands
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.action)
            .ok_or_else(|| TermfolioError::UnknownCommand(id.to_string()))?;
        self.run(id, action, handler);
        Ok(action)
    }

    fn run(&mut self, id: &str, action: CommandAction, handler: &mut impl CommandHandler) {
        info!(command = id, ?action, "Executing palette command");
        handler.handle(action);
        self.close();
        // Cleared for next time; the store keeps the last non-empty query
        self.query.clear();
        self.selected = 0;
    }

    /// Navigation keys inside the palette. Returns whether the key was consumed.
    ///
    /// Printable characters are left to the text input.
    pub fn handle_key(&mut self, event: &KeyEvent, handler: &mut impl CommandHandler) -> bool {
        match event.key {
            Key::ArrowDown => self.select_next(),
            Key::ArrowUp => self.select_previous(),
            Key::Enter => {
                self.execute_selected(handler);
            }
            Key::Escape => self.close(),
            _ => return false,
        }
        true
    }
}
