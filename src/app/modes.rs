//! Input mode state machine.
//!
//! The mode decides how a key is interpreted:
//! - **Normal**: navigation and commands
//! - **Search**: typing a query or moving through its results
//! - **`TokenEntry`**: typing a session token

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the search query.
    Typing,

    /// Keys move through the filtered doctors; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// Free-text search with its focus state.
    Search(SearchFocus),

    /// Typing a session token into the token prompt.
    TokenEntry,
}

impl InputMode {
    /// Whether the search bar should be shown.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    /// Whether key presses are captured as text.
    #[must_use]
    pub const fn captures_text(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing) | Self::TokenEntry)
    }
}
