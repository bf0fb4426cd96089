//! Empty state renderer.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered message with a dimmed subtitle below it.
///
/// The message lands two rows below `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = display_len(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(row + 2, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = display_len(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(row + 3, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());

    row + 4
}
