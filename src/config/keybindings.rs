//! Keyboard bindings configuration.

use crate::model::NavCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to navigation commands.
///
/// Arrow and paging keys plus vim-style letters.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, NavCommand>,
}

impl KeyBindings {
    /// Look up the command for a key event.
    ///
    /// Only the key code and modifiers are compared.
    pub fn get(&self, key: KeyEvent) -> Option<NavCommand> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind `code` with `modifiers` to `command`, replacing any previous binding.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, command: NavCommand) {
        self.bindings
            .insert(KeyEvent::new(code, modifiers), command);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Arrow keys
        keys.bind(KeyCode::Down, KeyModifiers::NONE, NavCommand::Down);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, NavCommand::Up);
        keys.bind(KeyCode::Right, KeyModifiers::NONE, NavCommand::Right);
        keys.bind(KeyCode::Left, KeyModifiers::NONE, NavCommand::Left);

        // Paging
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, NavCommand::PageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, NavCommand::PageUp);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, NavCommand::Home);

        // Vim-style
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, NavCommand::Down);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, NavCommand::Up);
        keys.bind(KeyCode::Char('l'), KeyModifiers::NONE, NavCommand::Right);
        keys.bind(KeyCode::Char('h'), KeyModifiers::NONE, NavCommand::Left);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, NavCommand::Home);

        // Application controls
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, NavCommand::Quit);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, NavCommand::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, NavCommand::Quit);

        keys
    }
}
