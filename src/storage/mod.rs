//! Storage layer for the persisted session token.
//!
//! The plugin persists exactly one value: the session token. It survives
//! plugin reloads and Zellij restarts, and is read once at startup.
//!
//! # Modules
//!
//! - `backend`: [`SessionStore`] trait
//! - `json`: JSON file implementation with atomic writes
//! - `models`: On-disk record format

pub mod backend;
pub mod json;
pub mod models;

pub use backend::SessionStore;
pub use json::JsonSessionStore;
pub use models::SessionRecord;
