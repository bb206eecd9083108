//! Navigation dispatcher
//!
//! Turns validated [`RouteTarget`]s into view transitions. The component
//! depends on the [`Navigator`] capability only; the concrete navigator is
//! injected, so tests swap in a recording double and never open anything.

use crate::search::RouteTarget;
use std::sync::Mutex;

/// Capability to transition the active view to a site path
pub trait Navigator {
    /// Go to the given site-relative path
    ///
    /// Side effect only; implementations must not fail loudly on a path
    /// they cannot handle.
    fn go_to(&self, path: &str);
}

/// Dispatch a target through a navigator
///
/// Empty or malformed targets are a no-op, not an error; callers are
/// expected to pass targets derived from real search state, and this guard
/// keeps a bad one from ever reaching the navigator. Returns whether the
/// navigator was invoked.
pub fn dispatch(navigator: &dyn Navigator, target: &RouteTarget) -> bool {
    if !target.is_well_formed() {
        return false;
    }
    navigator.go_to(target.path());
    true
}

/// Navigator that opens the page in the default browser
///
/// Joins the configured site URL with the route; without a site URL it
/// prints the route instead, which keeps the tool useful in scripts.
pub struct LinkNavigator {
    site_url: Option<String>,
    quiet: bool,
}

impl LinkNavigator {
    /// Create a navigator for the given site
    #[must_use]
    pub fn new(site_url: Option<String>, quiet: bool) -> Self {
        Self { site_url, quiet }
    }

    /// The absolute URL a path resolves to, when a site is configured
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<String> {
        self.site_url
            .as_deref()
            .map(|base| format!("{}{}", base.trim_end_matches('/'), path))
    }
}

impl Navigator for LinkNavigator {
    fn go_to(&self, path: &str) {
        match self.resolve(path) {
            Some(url) => {
                if let Err(e) = open::that(&url) {
                    eprintln!("Failed to open {url}: {e}");
                } else if !self.quiet {
                    println!("Opened {url}");
                }
            }
            None => println!("{path}"),
        }
    }
}

/// Navigator that records every visited path
///
/// Test double; `go_to` takes `&self`, hence the interior mutability.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths visited so far, in order
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().expect("navigator lock").clone()
    }

    /// The most recently visited path
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.visited.lock().expect("navigator lock").last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.visited
            .lock()
            .expect("navigator lock")
            .push(path.to_string());
    }
}
