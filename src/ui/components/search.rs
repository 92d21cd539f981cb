//! Search bar component renderer.
//!
//! Renders a bordered box holding the mode tabs, the query text, and (in
//! semantic mode) the page size selector.

use crate::app::{PageSize, SearchMode};
use crate::ui::helpers::{char_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SessionSnapshot;

/// Horizontal margin for the search box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Appends the three-line search box plus the page size line.
///
/// ```text
///   ┌──────────────────────────────────────────────────────┐
///   │ [Exact Match]  Semantic Search   Search: army doctor │
///   └──────────────────────────────────────────────────────┘
///   Page size:  10  [50]  100  500  All
/// ```
pub fn render_search_bar(out: &mut String, snapshot: &SessionSnapshot, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    out.push_str(&format!("{margin}{border}┌{}┐{}\n", "─".repeat(inner_width), Theme::reset()));

    let mut plain_len = 1;
    let mut line = String::from(" ");
    for mode in [SearchMode::Exact, SearchMode::Semantic] {
        let label = if mode == snapshot.mode {
            format!("[{}]", mode.label())
        } else {
            format!(" {} ", mode.label())
        };
        plain_len += char_width(&label) + 1;
        line.push_str(&tab(&label, mode == snapshot.mode, theme));
        line.push(' ');
    }

    let status = if snapshot.loading { "  Searching..." } else { "" };
    let query_room = inner_width.saturating_sub(plain_len + char_width(" Search: ") + char_width(status));
    let query = truncate(&snapshot.query, query_room);
    let search_text = format!(" Search: {query}");
    plain_len += char_width(&search_text) + char_width(status);

    line.push_str(&Theme::fg(&theme.colors.text_normal));
    line.push_str(&search_text);
    if snapshot.loading {
        line.push_str(&Theme::fg(&theme.colors.loading_fg));
        line.push_str(status);
    }

    out.push_str(&format!(
        "{margin}{border}│{line}{}{border}│{}\n",
        " ".repeat(inner_width.saturating_sub(plain_len)),
        Theme::reset()
    ));
    out.push_str(&format!("{margin}{border}└{}┘{}\n", "─".repeat(inner_width), Theme::reset()));

    if snapshot.mode == SearchMode::Semantic {
        render_page_sizes(out, snapshot.page_size, theme);
    }
}

fn render_page_sizes(out: &mut String, selected: PageSize, theme: &Theme) {
    out.push_str(&" ".repeat(SEARCH_BOX_MARGIN));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str("Page size: ");
    for size in PageSize::OPTIONS {
        out.push(' ');
        out.push_str(&tab(&size.label(), size == selected, theme));
    }
    out.push_str(Theme::reset());
    out.push('\n');
}

fn tab(label: &str, active: bool, theme: &Theme) -> String {
    if active {
        format!(
            "{}{}{}{label}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.accent_fg),
            Theme::bg(&theme.colors.accent),
            Theme::reset()
        )
    } else {
        format!("{}{label}{}", Theme::fg(&theme.colors.text_dim), Theme::reset())
    }
}
