//! Footer component renderer.
//!
//! The footer carries the result range line, the page indicator, and the
//! command hints. The first two are only present once rows are visible.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SessionSnapshot;

const HINTS: &str = "<text>: search | :exact | :semantic | :size N|all | :next | :prev | :page N | :quit";

/// Appends the footer lines.
///
/// ```text
///           Showing 11 to 20 of 25 results   Page 2 of 3   < prev | next >
///  <text>: search | :exact | :semantic | :size N|all | :next | :prev | ...
/// ```
pub fn render_footer(out: &mut String, snapshot: &SessionSnapshot, theme: &Theme, cols: usize) {
    if let Some(status) = status_line(snapshot) {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&center(&status, cols));
        out.push_str(Theme::reset());
        out.push('\n');
    }

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&center(HINTS, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Builds the range and page line, or `None` when there are no results.
///
/// When the current page lies past the last one, the page indicator is kept
/// so the user can see where to go back to.
#[must_use]
pub fn status_line(snapshot: &SessionSnapshot) -> Option<String> {
    let mut line = match snapshot.page_range {
        Some(range) => format!(
            "Showing {} to {} of {} results",
            range.first, range.last, range.total
        ),
        None if snapshot.result_count > 0 => format!("{} results", snapshot.result_count),
        None => return None,
    };

    if snapshot.is_paginated() || snapshot.page_range.is_none() {
        line.push_str(&format!(
            "   Page {} of {}",
            snapshot.current_page, snapshot.total_pages
        ));

        let prev = if snapshot.has_previous() { "< prev" } else { "" };
        let next = if snapshot.has_next() { "next >" } else { "" };
        let nav = [prev, next]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" | ");
        if !nav.is_empty() {
            line.push_str("   ");
            line.push_str(&nav);
        }
    }

    Some(line)
}
