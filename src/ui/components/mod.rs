//! Composable UI component renderers.
//!
//! Each component prints one region of the screen with ANSI escapes and
//! returns the next free row.
//!
//! - [`header`]: title bar and specialty bar
//! - [`input`]: search box and token prompt
//! - [`table`]: doctor table
//! - [`detail`]: doctor detail page
//! - [`empty`]: empty state message
//! - [`footer`]: notice line and keybinding footer
//!
//! [`render_frame`] lays them out:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Specialty bar]
//! [Border]
//! [Input box - 3 lines, optional]
//! [Table headers + rows | Empty state | Detail page]
//! [Notice]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod input;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::{render_footer, render_notice};
use header::{render_header, render_speciality_bar};
use input::render_input_box;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal rule at `row`.
///
/// # Returns
///
/// The next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame for `vm`.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let bottom_border_row = footer_row.saturating_sub(1);
    let notice_row = bottom_border_row.saturating_sub(1);

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_speciality_bar(current_row, &vm.specialities, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(input) = &vm.input_box {
        current_row = render_input_box(current_row, input, theme, cols);
    }

    match &vm.body {
        Body::Listing { rows: items, .. } => {
            current_row = render_table_headers(current_row, theme);
            render_table_rows(current_row, items, theme, cols);
        }
        Body::Empty(empty) => {
            render_empty_state(current_row, empty, theme, cols);
        }
        Body::Detail(detail) => {
            render_detail(current_row, detail, theme, cols, notice_row);
        }
    }

    render_notice(notice_row, vm.notice.as_ref(), theme, cols);
    render_border(bottom_border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
