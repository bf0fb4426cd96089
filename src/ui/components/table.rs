//! Doctor table renderer.
//!
//! Columns: availability dot, name, specialty, locality, rating. The selected
//! row is drawn with the selection colors across the full width.

use crate::ui::helpers::{self, display_len, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DoctorRow;

const DOT_WIDTH: usize = 2;
const NAME_WIDTH: usize = 30;
const SPECIALITY_WIDTH: usize = 22;
const LOCALITY_WIDTH: usize = 18;

/// Renders the column titles.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(DOT_WIDTH));
    print_padded("NAME", NAME_WIDTH);
    print_padded("SPECIALITY", SPECIALITY_WIDTH);
    print_padded("AREA", LOCALITY_WIDTH);
    print!("RATING");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders `rows` one per line starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_table_rows(row: usize, rows: &[DoctorRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_table_row(row: usize, item: &DoctorRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    let dot_color = if item.available {
        &theme.colors.available_fg
    } else {
        &theme.colors.unavailable_fg
    };
    print!("{}●{base} ", Theme::fg(dot_color));

    let name_len = display_len(&item.name);
    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(NAME_WIDTH.saturating_sub(name_len)));

    print_padded(&item.speciality, SPECIALITY_WIDTH);
    print_padded(&item.locality, LOCALITY_WIDTH);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    let rating = if item.rating.is_empty() {
        String::new()
    } else {
        format!("★ {}", item.rating)
    };
    print!("{rating}");

    let line_len = DOT_WIDTH + NAME_WIDTH.max(name_len) + SPECIALITY_WIDTH + LOCALITY_WIDTH + display_len(&rating);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
