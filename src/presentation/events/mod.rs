//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which top-level screen a key selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSelect {
    /// The log classification screen.
    Classify,
    /// The price prediction screen.
    Predict,
}

/// Key-event predicates shared by the screens.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    ///
    /// Plain characters are reserved for the form fields, so quitting takes
    /// `Ctrl+C` or `Ctrl+Q`.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c' | 'q'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Maps function keys to screen selection.
    #[must_use]
    pub fn screen_select(key: &KeyEvent) -> Option<ScreenSelect> {
        match key.code {
            KeyCode::F(1) => Some(ScreenSelect::Classify),
            KeyCode::F(2) => Some(ScreenSelect::Predict),
            _ => None,
        }
    }
}
