//! Empty state component renderer.
//!
//! Shown in place of the table before the first search, while the first
//! search is loading, and when a search returns no rows. A failed search
//! looks the same as one with no matches.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SessionSnapshot;

/// Message and subtitle for the current empty state, if the table has no
/// rows to show.
///
/// Results can be held while the page shows none: switching to a mode with a
/// larger page size keeps the current page, which may then lie past the end.
#[must_use]
pub fn empty_message(snapshot: &SessionSnapshot) -> Option<(String, String)> {
    if !snapshot.visible_rows.is_empty() {
        return None;
    }

    let message = if !snapshot.has_searched {
        (
            "Search the National Classification of Occupations".to_string(),
            "Type a job title and press Enter".to_string(),
        )
    } else if snapshot.loading && snapshot.result_count == 0 {
        (
            "Searching...".to_string(),
            "Results appear when the search service answers".to_string(),
        )
    } else if snapshot.result_count > 0 {
        (
            format!(
                "Page {} is past the last page ({})",
                snapshot.current_page, snapshot.total_pages
            ),
            format!("Use :page {} or :prev", snapshot.total_pages),
        )
    } else {
        (
            "No occupations found".to_string(),
            "Try another query or switch to :semantic".to_string(),
        )
    };
    Some(message)
}

/// Appends a centered two-line message, preceded by a blank line.
pub fn render_empty_state(out: &mut String, snapshot: &SessionSnapshot, theme: &Theme, cols: usize) {
    let Some((message, subtitle)) = empty_message(snapshot) else {
        return;
    };

    let color = if snapshot.loading && snapshot.result_count == 0 {
        &theme.colors.loading_fg
    } else {
        &theme.colors.empty_state_fg
    };

    out.push('\n');
    out.push_str(&Theme::fg(color));
    out.push_str(&center(&message, cols));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&center(&subtitle, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
