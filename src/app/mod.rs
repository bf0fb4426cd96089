//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain, API, storage
//! and worker layers:
//!
//! ```text
//! Key / HTTP / Worker → Event → handle_event → AppState → Actions → Runtime
//!                                     ↑                                │
//!                                     └──────── responses ─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`context`]: Shared store for session, directory, profile and ratings
//! - [`filter`]: Specialty and free-text filtering, memoized
//! - [`browser`]: Route, search text and cursor of the doctor browser
//! - [`route`]: Listing and detail navigation
//! - [`notice`]: User-facing notifications
//! - [`actions`]: Side effects emitted for the runtime
//! - [`handler`]: Event processing
//! - [`modes`]: Input mode state machine
//! - [`state`]: Top-level state and view model computation

pub mod actions;
pub mod browser;
pub mod context;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod notice;
pub mod route;
pub mod state;

pub use actions::Action;
pub use context::AppContext;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use route::Route;
pub use state::AppState;
