//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Rendering entry point
//! - [`components`]: Per-region renderers
//! - [`helpers`]: Truncation, match ranges, highlighting
//! - [`theme`]: Color themes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, DoctorDetail, DoctorRow, EmptyState, FooterInfo, HeaderInfo, InputBoxInfo, NoticeLine,
    SpecialityChip, UIViewModel,
};
