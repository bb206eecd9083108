//! Search session - input state, debounce orchestration, result lifecycle
//!
//! [`SearchSession`] is the pure core of the interactive search component.
//! It owns the query text, the debounce timer, the stale-response guard and
//! the current result set, and it never performs I/O itself: callers feed
//! it events (keystrokes, clock ticks, backend responses) and execute the
//! [`QueryRequest`]s it hands back. That keeps every transition testable
//! with a hand-stepped clock and an in-memory backend.

use super::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use super::route::RouteTarget;
use super::traits::{QueryError, SortOrder};
use crate::{Place, PlaceKind};
use std::time::{Duration, Instant};

/// Default cap on rendered matches for the general search box
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Parameters distinguishing one search surface from another
///
/// The general site search and the city picker are the same component with
/// different specs; keeping them as data prevents the two from drifting
/// apart again.
#[derive(Debug, Clone)]
pub struct SearchSpec {
    /// Restrict matches to one kind, or `None` for all kinds
    pub kind: Option<PlaceKind>,
    /// Cap on returned matches, or `None` for all of them
    pub limit: Option<usize>,
    /// Name ordering requested from the backend
    pub order: SortOrder,
    /// Quiet period before a lookup is dispatched
    pub debounce: Duration,
    /// Input placeholder text
    pub placeholder: String,
}

impl SearchSpec {
    /// The site-wide search box: every kind, few results
    #[must_use]
    pub fn general() -> Self {
        Self {
            kind: None,
            limit: Some(DEFAULT_RESULT_LIMIT),
            order: SortOrder::NameAsc,
            debounce: DEFAULT_DEBOUNCE,
            placeholder: "Search places...".to_string(),
        }
    }

    /// The city picker: cities only, uncapped
    #[must_use]
    pub fn cities() -> Self {
        Self {
            kind: Some(PlaceKind::City),
            limit: None,
            order: SortOrder::NameAsc,
            debounce: DEFAULT_DEBOUNCE,
            placeholder: "Search cities...".to_string(),
        }
    }

    /// Override the kind filter
    #[must_use]
    pub fn with_kind(mut self, kind: Option<PlaceKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Override the result cap
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Override the quiet period
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

impl Default for SearchSpec {
    fn default() -> Self {
        Self::general()
    }
}

/// Lifecycle phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No query and nothing to show
    #[default]
    Idle,
    /// Query text just changed; timer re-armed
    Typing,
    /// Waiting out the quiet period
    Debouncing,
    /// A lookup for the current query is in flight
    Querying,
    /// Results for the current query are on screen
    Displaying,
    /// The lookup for the current query failed
    Error,
}

/// A lookup the caller should run against the query backend
///
/// `seq` correlates the eventual response with the query that produced it;
/// the session discards responses whose sequence is not the latest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub seq: u64,
    pub text: String,
    pub kind: Option<PlaceKind>,
    pub order: SortOrder,
    pub limit: Option<usize>,
}

/// Event-driven state for one search surface
#[derive(Debug)]
pub struct SearchSession {
    spec: SearchSpec,
    query: String,
    phase: Phase,
    debouncer: Debouncer,
    /// Sequence of the most recently issued (or invalidated) lookup
    seq: u64,
    results: Vec<Place>,
    error: Option<String>,
    /// A lookup for the current query text has completed
    settled: bool,
}

impl SearchSession {
    /// Create a session for the given spec
    #[must_use]
    pub fn new(spec: SearchSpec) -> Self {
        let debouncer = Debouncer::new(spec.debounce);
        Self {
            spec,
            query: String::new(),
            phase: Phase::Idle,
            debouncer,
            seq: 0,
            results: Vec::new(),
            error: None,
            settled: false,
        }
    }

    /// The spec this session runs under
    #[must_use]
    pub const fn spec(&self) -> &SearchSpec {
        &self.spec
    }

    /// Current query text, exactly as typed
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Matches for the most recent completed lookup, in backend order
    #[must_use]
    pub fn results(&self) -> &[Place] {
        &self.results
    }

    /// Error message from the most recent failed lookup
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a lookup for the current query text has completed
    ///
    /// Distinguishes "no matches" from "still waiting"; the presenter only
    /// shows an empty state once this is true.
    #[must_use]
    pub const fn lookup_settled(&self) -> bool {
        self.settled
    }

    /// Record a query text change
    ///
    /// Re-arms the debounce timer; any pending settle for the previous
    /// text is cancelled by the re-schedule.
    pub fn on_input(&mut self, text: impl Into<String>, now: Instant) {
        self.query = text.into();
        self.phase = Phase::Typing;
        self.error = None;
        self.settled = false;
        self.debouncer.schedule(now);
    }

    /// Advance the clock; returns a lookup to dispatch when the timer settles
    ///
    /// Settling with an empty (or whitespace-only) query clears the result
    /// set and returns to idle without ever touching the backend; the
    /// sequence bump discards any still-in-flight response.
    pub fn poll(&mut self, now: Instant) -> Option<QueryRequest> {
        if self.debouncer.fire(now) {
            let trimmed = self.query.trim();
            self.seq += 1;

            if trimmed.is_empty() {
                self.results.clear();
                self.error = None;
                self.phase = Phase::Idle;
                return None;
            }

            self.phase = Phase::Querying;
            return Some(QueryRequest {
                seq: self.seq,
                text: trimmed.to_string(),
                kind: self.spec.kind,
                order: self.spec.order,
                limit: self.spec.limit,
            });
        }

        if self.debouncer.is_pending() && self.phase == Phase::Typing {
            self.phase = Phase::Debouncing;
        }
        None
    }

    /// Deadline of the pending debounce, for event-loop poll timeouts
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Record a backend response
    ///
    /// Responses whose sequence is not the latest issued lookup are stale
    /// and dropped; returns whether the response was applied. A failed
    /// lookup clears the result set (fail soft) and keeps the message for
    /// inline display.
    pub fn on_response(&mut self, seq: u64, outcome: Result<Vec<Place>, QueryError>) -> bool {
        if seq != self.seq || self.phase != Phase::Querying {
            return false;
        }

        match outcome {
            Ok(hits) => {
                self.results = hits;
                self.error = None;
                self.phase = Phase::Displaying;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e.to_string());
                self.phase = Phase::Error;
            }
        }
        self.settled = true;
        true
    }

    /// Resolve an explicit submit to a navigation target
    ///
    /// Empty or whitespace-only input is a guarded no-op, not an error.
    #[must_use]
    pub fn submit(&self) -> Option<RouteTarget> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(RouteTarget::search(trimmed))
    }

    /// Resolve an activated result to its navigation target
    #[must_use]
    pub fn select(&self, index: usize) -> Option<RouteTarget> {
        self.results.get(index).map(RouteTarget::place)
    }

    /// Tear the session down to its initial state
    ///
    /// Clears the pending timer and bumps the sequence so an in-flight
    /// response is ignored when it arrives.
    pub fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.error = None;
        self.settled = false;
        self.seq += 1;
        self.debouncer.cancel();
        self.phase = Phase::Idle;
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SearchSpec::general())
    }
}
