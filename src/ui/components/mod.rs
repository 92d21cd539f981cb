//! Composable UI component renderers.
//!
//! Each component appends its lines to a shared output buffer.
//!
//! # Components
//!
//! - [`header`]: Title line
//! - [`search`]: Search box with mode tabs and page size selector
//! - [`table`]: Results table
//! - [`empty`]: Placeholder when no rows are visible
//! - [`footer`]: Range, page indicator, and command hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Page size line, semantic mode only]
//! [Table Headers + Border]   or   [Empty State]
//! [Table Rows]
//! [Border]
//! [Footer]
//! ```

pub mod empty;
pub mod footer;
pub mod header;
pub mod search;
pub mod table;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SessionSnapshot;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows, ColumnWidths};

fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders a complete frame for `snapshot` into `out`.
pub fn render_frame(out: &mut String, snapshot: &SessionSnapshot, theme: &Theme, cols: usize) {
    render_header(out, theme, cols);
    render_border(out, &theme.colors.border, cols);
    render_search_bar(out, snapshot, theme, cols);

    if snapshot.visible_rows.is_empty() {
        render_empty_state(out, snapshot, theme, cols);
    } else {
        let widths = ColumnWidths::compute(cols, snapshot.show_similarity);
        render_table_headers(out, widths, theme, cols);
        render_table_rows(out, snapshot, widths, theme);
    }

    render_border(out, &theme.colors.border, cols);
    render_footer(out, snapshot, theme, cols);
}
