//! Event handling for the search TUI
//!
//! Maps keyboard events to application actions. The caller owns the clock
//! and the session, so this layer only mutates presentation state and
//! reports what happened.

use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Query text changed; the session needs to hear about it
    QueryChanged,
    /// Enter pressed; activate the highlighted result or submit the query
    Activate,
    /// Exit without choosing anything
    Abort,
    /// No action taken
    Ignored,
}

/// Handle a key event against the app state
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => EventResult::Activate,

        // Result navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }

        // Input cursor movement
        (KeyCode::Left, _) => {
            state.input_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.input_cursor_right();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            if state.input.is_empty() {
                EventResult::Ignored
            } else {
                state.input_clear();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.input_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => {
            if state.input.is_empty() {
                EventResult::Ignored
            } else {
                state.input_backspace();
                EventResult::QueryChanged
            }
        }
        (KeyCode::Delete, _) => {
            if state.input_cursor >= state.input.len() {
                EventResult::Ignored
            } else {
                state.input_delete();
                EventResult::QueryChanged
            }
        }

        _ => EventResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchSpec;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_reports_query_changed() {
        let mut state = AppState::new(SearchSpec::general());

        assert_eq!(handle_key(&mut state, key(KeyCode::Char('t'))), EventResult::QueryChanged);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('u'))), EventResult::QueryChanged);
        assert_eq!(state.input, "tu");
    }

    #[test]
    fn test_backspace_on_empty_is_ignored() {
        let mut state = AppState::new(SearchSpec::general());
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Backspace)),
            EventResult::Ignored
        );

        handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Backspace)),
            EventResult::QueryChanged
        );
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_exit_keys() {
        let mut state = AppState::new(SearchSpec::general());
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Abort);
        assert_eq!(handle_key(&mut state, ctrl('c')), EventResult::Abort);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            EventResult::Activate
        );
    }

    #[test]
    fn test_ctrl_u_clears_input() {
        let mut state = AppState::new(SearchSpec::general());
        handle_key(&mut state, key(KeyCode::Char('a')));
        handle_key(&mut state, key(KeyCode::Char('b')));

        assert_eq!(handle_key(&mut state, ctrl('u')), EventResult::QueryChanged);
        assert!(state.input.is_empty());

        assert_eq!(handle_key(&mut state, ctrl('u')), EventResult::Ignored);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut state = AppState::new(SearchSpec::general());
        assert_eq!(
            handle_key(&mut state, key(KeyCode::F(5))),
            EventResult::Ignored
        );
    }
}
