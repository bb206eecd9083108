//! Application state for the search TUI
//!
//! Wraps the search session with what the terminal adds on top: the text
//! field cursor, the result cursor, and the exit outcome. The session owns
//! the search behavior; this struct owns only presentation state.

use crate::search::{RouteTarget, SearchSession, SearchSpec};

/// Mutable state for one interactive search run
#[derive(Debug)]
pub struct AppState {
    /// The search component itself
    pub session: SearchSession,
    /// Query text as edited in the input field
    pub input: String,
    /// Cursor position within the input string (byte offset)
    pub input_cursor: usize,
    /// Cursor position in the result list
    pub cursor: usize,
    /// Height of the visible result area (set during render)
    pub visible_height: usize,
    /// Whether the loop should exit
    pub should_exit: bool,
    /// The route chosen before exit, if any
    pub outcome: Option<RouteTarget>,
}

impl AppState {
    /// Create state for a fresh session
    #[must_use]
    pub fn new(spec: SearchSpec) -> Self {
        Self {
            session: SearchSession::new(spec),
            input: String::new(),
            input_cursor: 0,
            cursor: 0,
            visible_height: 10,
            should_exit: false,
            outcome: None,
        }
    }

    /// Add a character to the input at the cursor
    pub fn input_push(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    /// Remove the character before the cursor (backspace)
    pub fn input_backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev_char_boundary = self.input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.input.remove(prev_char_boundary);
            self.input_cursor = prev_char_boundary;
        }
    }

    /// Delete the character under the cursor
    pub fn input_delete(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input.remove(self.input_cursor);
        }
    }

    /// Move the input cursor left one character
    pub fn input_cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = self.input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the input cursor right one character
    pub fn input_cursor_right(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input_cursor = self.input[self.input_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.input.len(), |(i, _)| self.input_cursor + i);
        }
    }

    /// Clear the input
    pub fn input_clear(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }

    /// Move the result cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the result cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.session.results().len() {
            self.cursor += 1;
        }
    }

    /// Keep the result cursor inside the current result set
    ///
    /// Called after each applied response, since a new result set may be
    /// shorter than the previous one.
    pub fn clamp_cursor(&mut self) {
        let len = self.session.results().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// First visible result row, keeping the cursor in view
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        if self.visible_height == 0 {
            return 0;
        }
        (self.cursor + 1).saturating_sub(self.visible_height)
    }

    /// Mark the loop for exit with the chosen route
    pub fn finish(&mut self, outcome: Option<RouteTarget>) {
        self.outcome = outcome;
        self.should_exit = true;
    }
}
