//! Status bar widget with key hints and match count

use crate::search::{Phase, SearchSession};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line bar: match count on the left, key hints on the right
pub struct StatusBar<'a> {
    session: &'a SearchSession,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(session: &'a SearchSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    fn summary(&self) -> String {
        match self.session.phase() {
            Phase::Idle => "type to search".to_string(),
            Phase::Typing | Phase::Debouncing => "...".to_string(),
            Phase::Querying => "searching".to_string(),
            Phase::Displaying => format!("{} match(es)", self.session.results().len()),
            Phase::Error => "search failed".to_string(),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.summary(), self.theme.dimmed_style()),
            Span::raw("  "),
            Span::styled(
                "enter: open  ↑/↓: move  esc: quit",
                self.theme.dimmed_style(),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
