//! Terminal UI for interactive place search
//!
//! A thin ratatui front-end over the pure search session: `state` holds
//! presentation state, `events` maps keys to actions, `widgets` render,
//! and `app` runs the event loop.

pub mod app;
pub mod error;
pub mod events;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::SearchApp;
pub use error::UiError;
pub use state::AppState;
pub use theme::Theme;
