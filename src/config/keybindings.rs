//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings with option to override via configuration.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup. Terminals disagree
    /// on whether shifted symbols (`>`, `V`) carry SHIFT, so character keys
    /// also match with SHIFT stripped.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&normalized) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)))
                .copied(),
            _ => None,
        }
    }

    /// Bind `key` to `action`, replacing any existing binding of `key`.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings
            .insert(KeyEvent::new(key.code, key.modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        let mut bind = |code: KeyCode, action: KeyAction| {
            bindings.bind(KeyEvent::new(code, KeyModifiers::NONE), action);
        };

        // Row cursor
        bind(KeyCode::Char('k'), KeyAction::CursorUp);
        bind(KeyCode::Up, KeyAction::CursorUp);
        bind(KeyCode::Char('j'), KeyAction::CursorDown);
        bind(KeyCode::Down, KeyAction::CursorDown);
        bind(KeyCode::Char('g'), KeyAction::CursorFirst);
        bind(KeyCode::Home, KeyAction::CursorFirst);
        bind(KeyCode::Char('G'), KeyAction::CursorLast);
        bind(KeyCode::End, KeyAction::CursorLast);
        bind(KeyCode::PageUp, KeyAction::PageUp);
        bind(KeyCode::PageDown, KeyAction::PageDown);

        // Selection
        bind(KeyCode::Char(' '), KeyAction::ToggleRowSelection);
        bind(KeyCode::Enter, KeyAction::ToggleRowSelection);
        bind(KeyCode::Char('a'), KeyAction::SelectAll);
        bind(KeyCode::Esc, KeyAction::ClearSelection);
        bind(KeyCode::Char('m'), KeyAction::ToggleSelectionMode);

        // Columns
        bind(KeyCode::Tab, KeyAction::NextColumn);
        bind(KeyCode::Char('s'), KeyAction::SortFocusedColumn);
        bind(KeyCode::Char('>'), KeyAction::WidenColumn);
        bind(KeyCode::Char('<'), KeyAction::NarrowColumn);
        bind(KeyCode::Char('v'), KeyAction::HideColumn);
        bind(KeyCode::Char('V'), KeyAction::ShowAllColumns);
        bind(KeyCode::Char('r'), KeyAction::ToggleLayoutMode);

        // Viewport
        bind(KeyCode::Char('h'), KeyAction::ScrollLeft);
        bind(KeyCode::Left, KeyAction::ScrollLeft);
        bind(KeyCode::Char('l'), KeyAction::ScrollRight);
        bind(KeyCode::Right, KeyAction::ScrollRight);

        // Appearance
        bind(KeyCode::Char('o'), KeyAction::ToggleOutline);

        // Application controls
        bind(KeyCode::Char('q'), KeyAction::Quit);

        // Shift+Tab arrives as BackTab with SHIFT
        bindings.bind(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevColumn,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            KeyAction::PrevColumn,
        );
        bindings.bind(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        bindings
    }
}
