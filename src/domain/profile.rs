//! User profile returned by the backend for an authenticated session.

use super::doctor::Address;
use serde::{Deserialize, Serialize};

/// Profile of the signed-in user.
///
/// Every field defaults so partially filled accounts still decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub dob: String,
}

/// Whether a profile is known, explicitly absent, or not fetched yet.
///
/// `NoUser` is set when the session token is cleared and must never be
/// confused with `NotLoaded`, which only exists before the first decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileState {
    #[default]
    NotLoaded,
    NoUser,
    Loaded(UserProfile),
}

impl ProfileState {
    /// Returns the loaded profile, if any.
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Loaded(profile) => Some(profile),
            Self::NotLoaded | Self::NoUser => None,
        }
    }
}
