//! The interactive search event loop
//!
//! Wires the pure search session to the terminal: keyboard events feed the
//! session, the debounce deadline bounds the poll timeout, settled queries
//! go to the background worker, and completed responses come back through
//! the stale guard before rendering. The loop exits with the chosen route,
//! or `None` when the user aborts.

use super::error::{Result, UiError};
use super::events::{EventResult, handle_key};
use super::state::AppState;
use super::theme::Theme;
use super::widgets::{ResultList, SearchBar, StatusBar};
use crate::search::{PlaceQuery, RouteTarget, SearchSpec, SearchWorker};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Upper bound on the event poll timeout; keeps the UI reactive to
/// worker responses even when no deadline is pending
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Interactive search runner
pub struct SearchApp {
    backend: Arc<dyn PlaceQuery + Send + Sync>,
    theme: Theme,
}

impl SearchApp {
    /// Create a runner over the given query backend
    #[must_use]
    pub fn new(backend: Arc<dyn PlaceQuery + Send + Sync>) -> Self {
        Self {
            backend,
            theme: Theme::default(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(|e| UiError::TerminalError(e.to_string()))
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run an interactive search and return the chosen route
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up or an I/O error
    /// occurs in the event loop.
    pub fn run(
        &self,
        spec: SearchSpec,
        initial_query: Option<String>,
    ) -> Result<Option<RouteTarget>> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, spec, initial_query);
        Self::cleanup_terminal()?;
        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        spec: SearchSpec,
        initial_query: Option<String>,
    ) -> Result<Option<RouteTarget>> {
        let worker = SearchWorker::spawn(Arc::clone(&self.backend));
        let mut state = AppState::new(spec);

        if let Some(query) = initial_query {
            state.input_cursor = query.len();
            state.input = query;
            state.session.on_input(state.input.clone(), Instant::now());
        }

        while !state.should_exit {
            terminal
                .draw(|frame| self.draw(frame, &mut state))
                .map_err(|e| UiError::TerminalError(e.to_string()))?;

            if event::poll(self.poll_timeout(&state))?
                && let Event::Key(key) = event::read()?
            {
                match handle_key(&mut state, key) {
                    EventResult::QueryChanged => {
                        state.session.on_input(state.input.clone(), Instant::now());
                    }
                    EventResult::Activate => {
                        // Activate the highlighted result; with none, fall
                        // back to submitting the query itself
                        let route = state
                            .session
                            .select(state.cursor)
                            .or_else(|| state.session.submit());
                        if route.is_some() {
                            state.finish(route);
                        }
                    }
                    EventResult::Abort => state.finish(None),
                    EventResult::Continue | EventResult::Ignored => {}
                }
            }

            let now = Instant::now();
            if let Some(request) = state.session.poll(now) {
                worker.submit(request);
            }
            while let Some(response) = worker.try_recv() {
                if state.session.on_response(response.seq, response.outcome) {
                    state.clamp_cursor();
                }
            }
        }

        // Teardown: cancel the pending timer and invalidate in-flight work;
        // dropping the worker stops its thread
        state.session.reset();
        Ok(state.outcome)
    }

    /// Sleep until the next interesting moment, bounded by `POLL_INTERVAL`
    fn poll_timeout(&self, state: &AppState) -> Duration {
        state
            .session
            .next_deadline()
            .map_or(POLL_INTERVAL, |deadline| {
                deadline
                    .saturating_duration_since(Instant::now())
                    .min(POLL_INTERVAL)
            })
    }

    fn draw(&self, frame: &mut Frame, state: &mut AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        // Inner height of the bordered list area
        state.visible_height = chunks[1].height.saturating_sub(2) as usize;

        frame.render_widget(
            SearchBar::new(
                &state.input,
                state.input_cursor,
                &state.session.spec().placeholder,
                &self.theme,
            ),
            chunks[0],
        );
        frame.render_widget(
            ResultList::new(
                &state.session,
                state.cursor,
                state.scroll_offset(),
                &self.theme,
            ),
            chunks[1],
        );
        frame.render_widget(StatusBar::new(&state.session, &self.theme), chunks[2]);
    }
}
