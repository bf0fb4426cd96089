//! Header and specialty bar renderers.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, SpecialityChip};

/// Renders the centered, bold title bar.
///
/// # Returns
///
/// The next available row position.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_len(&header.title).min(cols);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the numbered specialty chips on one line, the active one inverted.
///
/// Chips that do not fit in `cols` are dropped from the end.
pub fn render_speciality_bar(row: usize, chips: &[SpecialityChip], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 0;

    for chip in chips {
        let label = format!(" {} {} ", chip.key, chip.label);
        let len = display_len(&label);
        if used + len > cols {
            break;
        }

        if chip.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.active_speciality_fg));
            print!("{}", Theme::bg(&theme.colors.active_speciality_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        used += len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
