//! Doctor detail page renderer.

use crate::ui::helpers::{display_len, position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DoctorDetail;

const LABEL_WIDTH: usize = 14;
const LEFT_MARGIN: usize = 2;

fn render_field(row: usize, label: &str, value: &str, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(LEFT_MARGIN));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_padded(label, LABEL_WIDTH);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{value}");
    print!("{}", Theme::reset());
    row + 1
}

/// Splits `text` into lines of at most `width` characters on word boundaries.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && display_len(&line) + 1 + display_len(word) > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Renders the detail page starting at `row`, stopping before `last_row`.
pub fn render_detail(row: usize, detail: &DoctorDetail, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let mut current = row + 1;

    position_cursor(current, 1);
    print!("{}", " ".repeat(LEFT_MARGIN));
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", detail.name);
    print!("{}", Theme::reset());
    let (dot_color, availability) = if detail.available {
        (&theme.colors.available_fg, "Available")
    } else {
        (&theme.colors.unavailable_fg, "Not available")
    };
    print!("  {}● {availability}{}", Theme::fg(dot_color), Theme::reset());
    current += 1;

    current = render_field(current, "Qualification", &detail.qualification, theme);
    if !detail.experience.is_empty() {
        current = render_field(current, "Experience", &detail.experience, theme);
    }
    if let Some(rating) = &detail.rating {
        current = render_field(current, "Rating", &format!("★ {rating}"), theme);
    }
    current = render_field(current, "Fee", &detail.fee, theme);
    if !detail.keywords.is_empty() {
        let width = cols.saturating_sub(LEFT_MARGIN + LABEL_WIDTH).max(10);
        current = render_field(current, "Treats", &truncate(&detail.keywords.join(", "), width), theme);
    }
    for (idx, line) in detail.address.iter().enumerate() {
        let label = if idx == 0 { "Address" } else { "" };
        current = render_field(current, label, line, theme);
    }

    if !detail.about.is_empty() {
        current += 1;
        let width = cols.saturating_sub(LEFT_MARGIN * 2).max(20);
        current = render_field(current, "About", "", theme);
        for line in wrap(&detail.about, width) {
            if current >= last_row {
                break;
            }
            position_cursor(current, 1);
            print!("{}", " ".repeat(LEFT_MARGIN));
            print!("{}{line}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
            current += 1;
        }
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("Dr. Davis has a strong commitment to delivering care", 16);
        assert_eq!(lines, vec!["Dr. Davis has a", "strong", "commitment to", "delivering care"]);
        assert!(wrap("   ", 10).is_empty());
    }
}
