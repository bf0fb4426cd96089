//! Footer and notice line renderers.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, NoticeLine};

/// Renders keybinding hints on the left and the session status on the right.
///
/// Hints are truncated first so the status stays visible on narrow panes.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let status = truncate(&footer.status, cols);
    let status_len = display_len(&status);
    let hints = truncate(&footer.keybindings, cols.saturating_sub(status_len + 2));
    let hints_len = display_len(&hints);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{hints}");
    print!("{}", " ".repeat(cols.saturating_sub(hints_len + status_len)));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{status}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the latest notice, or a blank line when there is none.
pub fn render_notice(row: usize, notice: Option<&NoticeLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let Some(notice) = notice else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let text = truncate(&notice.text, cols);
    print!("{}", Theme::fg(theme.colors.notice(notice.level)));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(display_len(&text))));
    print!("{}", Theme::reset());
    row + 1
}
