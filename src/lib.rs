//! Docfinder: a Zellij plugin for browsing doctors and their profiles.
//!
//! Docfinder talks to an appointment-booking backend over HTTP and offers:
//! - A doctor directory, enriched with disease keywords per specialty
//! - Specialty filtering and free-text search over names, specialties and
//!   the diseases each specialty treats
//! - A doctor profile page with fees, address, availability and a rating
//! - A persisted sign-in token and the signed-in user's profile

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Shared context: token, directory, profile        │
//! │  - Doctor browser: route, search, selection         │
//! │  - Event handling and view model computation        │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Worker Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (worker/)     │
//! │ - Rendering   │   │ - Requests    │   │ - Session I/O │
//! │ - Theming     │   │ - Envelopes   │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//!                                         ┌───────────────┐
//!                                         │ Storage Layer │
//!                                         │ (storage/)    │
//!                                         └───────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/docfinder.wasm" {
//!         backend_url "https://api.example.com"
//!         currency_symbol "₹"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Startup
//!
//! 1. The shim parses [`Config`], installs tracing and asks for web access.
//! 2. Once access is granted, the doctor directory is requested and the
//!    worker is asked for the persisted session token.
//! 3. A restored token triggers the profile request.
//!
//! # Example
//!
//! ```rust
//! use docfinder::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Start)?;
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), docfinder::DocfinderError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppContext, AppState, Event, InputMode, SearchFocus};
pub use domain::{DocfinderError, Doctor, Result, Speciality};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Base URL used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

/// Currency shown next to consultation fees by default.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Default `EnvFilter` directive.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration from the Zellij layout block.
///
/// ```kdl
/// plugin location="file:/path/to/docfinder.wasm" {
///     backend_url "https://api.example.com/"
///     currency_symbol "$"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend, without a trailing slash.
    pub backend_url: String,

    pub currency_symbol: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `docfinder=trace`.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Blank optional values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`DocfinderError::Config`] if `backend_url` is missing or
    /// blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use docfinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("backend_url".to_string(), " https://api.example.com/ ".to_string());
    ///
    /// let config = Config::from_zellij(&map)?;
    /// assert_eq!(config.backend_url, "https://api.example.com");
    /// assert_eq!(config.currency_symbol, "₹");
    /// # Ok::<(), docfinder::DocfinderError>(())
    /// ```
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Result<Self> {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let backend_url = get("backend_url")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| DocfinderError::Config("backend_url is not set".to_string()))?;

        Ok(Self {
            backend_url,
            currency_symbol: get("currency_symbol").unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level").unwrap_or_else(|| DEFAULT_TRACE_LEVEL.to_string()),
        })
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// Failures are logged and fall through to the next source.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(path) = &self.theme_file {
            match Theme::from_file(path) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(theme_file = %path, error = %e, "failed to load theme file"),
            }
        }

        if let Some(name) = &self.theme_name {
            match Theme::from_name(name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme = %name, "unknown theme, using default"),
            }
        }

        Theme::default()
    }
}

/// Builds the initial state: empty directory, no session, resolved theme.
///
/// Nothing is fetched until [`Event::Start`] is handled.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(backend_url = %config.backend_url, "initializing docfinder plugin");

    AppState::new(
        AppContext::new(config.backend_url.clone()),
        config.theme(),
        config.currency_symbol.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("backend_url", "https://api.example.com//"),
            ("currency_symbol", "$"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file, None);
        assert_eq!(config.trace_level, "debug");
    }

    #[test]
    fn blank_optional_values_use_defaults() {
        let config = Config::from_zellij(&map(&[
            ("backend_url", "http://10.0.0.2:4000"),
            ("currency_symbol", "  "),
            ("trace_level", ""),
        ]))
        .unwrap();

        assert_eq!(config.currency_symbol, DEFAULT_CURRENCY_SYMBOL);
        assert_eq!(config.trace_level, DEFAULT_TRACE_LEVEL);
    }

    #[test]
    fn backend_url_is_required() {
        for pairs in [vec![], vec![("backend_url", "   ")], vec![("backend_url", "/")]] {
            assert!(matches!(
                Config::from_zellij(&map(&pairs)),
                Err(DocfinderError::Config(_))
            ));
        }
    }

    #[test]
    fn theme_resolution_falls_back() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().name, "catppuccin-latte");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn initialize_uses_backend_and_currency() {
        let config = Config {
            backend_url: "http://example.test".to_string(),
            currency_symbol: "€".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.context.base_url(), "http://example.test");
        assert_eq!(state.currency_symbol, "€");
        assert!(state.context.doctors().is_empty());
        assert!(state.context.token.is_none());
    }
}
