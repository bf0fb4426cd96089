//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed
//! by the renderer. They hold display-ready strings and flags only.

use crate::app::notice::NoticeLevel;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// The six fixed specialties, in keybinding order.
    pub specialities: Vec<SpecialityChip>,

    /// Search box or token prompt, when either is open.
    pub input_box: Option<InputBoxInfo>,

    pub body: Body,

    /// Latest pending notice.
    pub notice: Option<NoticeLine>,

    pub footer: FooterInfo,
}

/// Main area of the screen.
#[derive(Debug, Clone)]
pub enum Body {
    /// Windowed slice of the filtered doctors.
    Listing {
        rows: Vec<DoctorRow>,
        /// Index of the selected row within `rows`.
        selected_index: usize,
    },

    /// Nothing to list, or the opened doctor is gone.
    Empty(EmptyState),

    /// One doctor's detail page.
    Detail(DoctorDetail),
}

/// One row of the doctor table.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorRow {
    pub name: String,
    pub speciality: String,
    /// Second address line, used as the locality column.
    pub locality: String,
    /// Formatted rating, e.g. `4.3 (128)`; empty when unrated.
    pub rating: String,
    pub available: bool,
    pub is_selected: bool,

    /// Character ranges of `name` matching the search text.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Fields of the doctor detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorDetail {
    pub name: String,
    /// Degree and specialty, e.g. `MBBS - General physician`.
    pub qualification: String,
    pub experience: String,
    pub about: String,
    /// Fee prefixed with the configured currency symbol.
    pub fee: String,
    pub address: Vec<String>,
    pub available: bool,
    pub rating: Option<String>,
    /// Symptom keywords attached from the specialty table.
    pub keywords: Vec<String>,
}

/// Entry of the specialty bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialityChip {
    /// 1-based key that toggles this specialty.
    pub key: usize,
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding hints for the current mode.
    pub keybindings: String,

    /// Right-aligned status: loading indicator and session state.
    pub status: String,
}

/// Empty state message, shown in place of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Text input box shown above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBoxInfo {
    /// Prompt label, e.g. `Search` or `Token`.
    pub label: String,

    /// Text to display, already masked when secret.
    pub text: String,

    /// Whether keystrokes currently go to this box.
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeLine {
    pub level: NoticeLevel,
    /// Message prefixed with its local time.
    pub text: String,
}
