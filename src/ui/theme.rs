//! Color theme for the search TUI

use ratatui::style::{Color, Modifier, Style};

/// Styles shared by all widgets
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub border: Color,
    pub dimmed: Color,
    pub error: Color,
}

impl Theme {
    /// Style for the highlighted result row
    #[must_use]
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for window borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the focused window border
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for secondary text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for inline error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            error: Color::Red,
        }
    }
}
