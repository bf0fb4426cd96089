//! Shared rendering utilities.
//!
//! Cursor positioning, width-aware truncation, and search-match highlighting.
//! All ranges are character indices, never byte offsets, so names with
//! non-ASCII characters render correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies, counting one per character.
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use docfinder::ui::helpers::truncate;
///
/// assert_eq!(truncate("Dr. Christopher Lee", 10), "Dr. Chr...");
/// assert_eq!(truncate("Dr. A", 10), "Dr. A");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_len(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Case-insensitive, non-overlapping occurrences of `term` in `text`.
///
/// Returns `(start, end)` character ranges with exclusive ends.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let needle: Vec<char> = term.chars().map(fold).collect();
    if needle.is_empty() {
        return vec![];
    }
    let haystack: Vec<char> = text.chars().map(fold).collect();

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] == needle[..] {
            ranges.push((pos, pos + needle.len()));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

/// Prints `text` with the given character ranges in the match colors.
///
/// Selected rows skip highlighting so the selection colors stay readable.
/// Ranges beyond the end of `text` are clipped.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let plain: String = chars[current..start].iter().collect();
        print!("{plain}");

        let matched: String = chars[start..end].iter().collect();
        print!(
            "{}{}{matched}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal),
        );
        current = end;
    }

    let rest: String = chars[current..].iter().collect();
    print!("{rest}");
}

/// Prints `text` padded with spaces to exactly `width` cells.
pub fn print_padded(text: &str, width: usize) {
    let text = truncate(text, width);
    print!("{text}{}", " ".repeat(width.saturating_sub(display_len(&text))));
}
