//! Text input box, used for both search and the token prompt.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBoxInfo;

/// Horizontal margin on each side of the box.
const INPUT_BOX_MARGIN: usize = 5;

/// Renders a 3-line framed input box starting at `row`.
///
/// ```text
/// [margin] ┌──────────────┐ [margin]
/// [margin] │ Search: acne │ [margin]
/// [margin] └──────────────┘ [margin]
/// ```
///
/// An unfocused box is dimmed and shows no cursor.
///
/// # Returns
///
/// The next available row position (`row + 3`).
pub fn render_input_box(row: usize, input: &InputBoxInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let frame = if input.is_focused {
        Theme::fg(&theme.colors.input_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{frame}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let cursor = if input.is_focused { "▏" } else { "" };
    let content = truncate(&format!(" {}: {}{cursor}", input.label, input.text), inner_width);
    let padding = inner_width.saturating_sub(display_len(&content));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{frame}│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{content}");
    print!("{}", " ".repeat(padding));
    print!("{frame}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{frame}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
