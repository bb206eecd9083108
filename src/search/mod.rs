//! Search module - debounced place lookup and navigation targets
//!
//! The interactive search component, split the same way it behaves:
//!
//! - `session`: input state, phase machine, stale-response guard
//! - `debounce`: the cancellable quiet-period timer
//! - `traits`: the injected query backend capability
//! - `client`: background driver running lookups off the event loop
//! - `route`: navigation targets derived from selections and submits

pub mod client;
pub mod debounce;
pub mod route;
pub mod session;
pub mod traits;

pub use client::{QueryResponse, SearchWorker};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use route::RouteTarget;
pub use session::{DEFAULT_RESULT_LIMIT, Phase, QueryRequest, SearchSession, SearchSpec};
pub use traits::{FailingQuery, PlaceQuery, QueryError, SortOrder, StaticQuery};
