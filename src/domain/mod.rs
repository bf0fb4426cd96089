//! Domain layer for the Docfinder plugin.
//!
//! Core types for the doctor directory and the user session, independent of
//! Zellij APIs, rendering, or storage.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`speciality`]: The fixed specialty set and its static keyword/disease tables
//! - [`doctor`]: Doctor records as served by the backend, plus keyword enrichment
//! - [`profile`]: User profile and the tri-state profile marker
//! - [`rating`]: Ephemeral, randomly generated display ratings

pub mod doctor;
pub mod error;
pub mod profile;
pub mod rating;
pub mod speciality;

pub use doctor::{Address, Doctor};
pub use error::{DocfinderError, Result};
pub use profile::{ProfileState, UserProfile};
pub use rating::{generate_ratings, Rating, RatingMap};
pub use speciality::Speciality;
