//! Result list widget
//!
//! Renders the current result set as selectable rows, or the state the
//! session is in when there is nothing to list: blank while idle, a
//! progress note while a lookup is in flight, an inline message on a
//! failed lookup, and an explicit empty state once a lookup for a
//! non-empty query has completed with no matches.

use crate::search::{Phase, SearchSession};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Result list widget over the session's current state
pub struct ResultList<'a> {
    session: &'a SearchSession,
    /// Highlighted row
    cursor: usize,
    /// First visible row
    scroll_offset: usize,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    /// Create a new result list widget
    #[must_use]
    pub const fn new(
        session: &'a SearchSession,
        cursor: usize,
        scroll_offset: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            cursor,
            scroll_offset,
            theme,
        }
    }

    fn placeholder_line(&self) -> Option<Line<'a>> {
        if let Some(error) = self.session.error() {
            return Some(Line::from(Span::styled(
                format!("Search failed: {error}"),
                self.theme.error_style(),
            )));
        }

        match self.session.phase() {
            Phase::Querying => Some(Line::from(Span::styled(
                "Searching...",
                self.theme.dimmed_style(),
            ))),
            _ if self.session.results().is_empty()
                && !self.session.query().trim().is_empty()
                && self.session.lookup_settled() =>
            {
                Some(Line::from(Span::styled(
                    "No matching places",
                    self.theme.dimmed_style(),
                )))
            }
            // Empty query and empty results: render nothing
            _ => None,
        }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Places ");

        let inner = block.inner(area);
        block.render(area, buf);

        let results = self.session.results();
        if results.is_empty() {
            if let Some(line) = self.placeholder_line() {
                Paragraph::new(line).render(inner, buf);
            }
            return;
        }

        let visible = inner.height as usize;
        let lines: Vec<Line<'_>> = results
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible)
            .map(|(idx, place)| {
                let marker = if idx == self.cursor { "▸ " } else { "  " };
                let mut spans = vec![
                    Span::raw(marker),
                    Span::raw(place.name.as_str()),
                    Span::styled(format!("  [{}]", place.kind), self.theme.dimmed_style()),
                ];
                if let Some(region) = &place.region {
                    spans.push(Span::styled(
                        format!("  {region}"),
                        self.theme.dimmed_style(),
                    ));
                }

                let line = Line::from(spans);
                if idx == self.cursor {
                    line.style(self.theme.selection_style())
                } else {
                    line
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
