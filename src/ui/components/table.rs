//! Results table component renderer.
//!
//! Columns: `#`, title, NCO 2015, NCO 2004, division, subdivision, group,
//! family, and in semantic mode a trailing similarity column. Code and
//! ordinal columns have fixed widths; the text columns share what is left,
//! with the title getting the largest share.

use crate::ui::helpers::{pad_left, pad_right};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultRow, SessionSnapshot};

const ORDINAL_WIDTH: usize = 5;
const CODE_WIDTH: usize = 11;
const SCORE_WIDTH: usize = 10;
const GAP: &str = " ";

/// Character widths of every column for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub ordinal: usize,
    pub title: usize,
    pub code: usize,
    pub hierarchy: usize,
    pub score: usize,
}

impl ColumnWidths {
    /// Splits `cols` between the columns. The title takes twice the width
    /// of each hierarchy column.
    #[must_use]
    pub fn compute(cols: usize, show_similarity: bool) -> Self {
        let score = if show_similarity { SCORE_WIDTH } else { 0 };
        let column_count = if show_similarity { 9 } else { 8 };
        let fixed = ORDINAL_WIDTH + CODE_WIDTH * 2 + score + (column_count - 1);
        let flexible = cols.saturating_sub(fixed);

        let hierarchy = (flexible / 6).max(4);
        let title = flexible.saturating_sub(hierarchy * 4).max(8);

        Self {
            ordinal: ORDINAL_WIDTH,
            title,
            code: CODE_WIDTH,
            hierarchy,
            score,
        }
    }
}

/// Appends the column header line and a border.
pub fn render_table_headers(out: &mut String, widths: ColumnWidths, theme: &Theme, cols: usize) {
    let mut cells = vec![
        pad_left("#", widths.ordinal),
        pad_right("Title", widths.title),
        pad_right("NCO 2015", widths.code),
        pad_right("NCO 2004", widths.code),
        pad_right("Division", widths.hierarchy),
        pad_right("Subdivision", widths.hierarchy),
        pad_right("Group", widths.hierarchy),
        pad_right("Family", widths.hierarchy),
    ];
    if widths.score > 0 {
        cells.push(pad_left("Similarity", widths.score));
    }

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&cells.join(GAP));
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.border));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends one line per visible row.
pub fn render_table_rows(out: &mut String, snapshot: &SessionSnapshot, widths: ColumnWidths, theme: &Theme) {
    for row in &snapshot.visible_rows {
        render_table_row(out, row, widths, theme);
    }
}

fn render_table_row(out: &mut String, row: &ResultRow, widths: ColumnWidths, theme: &Theme) {
    let occupation = &row.occupation;

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&pad_left(&row.ordinal.to_string(), widths.ordinal));
    out.push_str(GAP);

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    let cells = [
        pad_right(&occupation.title, widths.title),
        pad_right(&occupation.code_2015, widths.code),
        pad_right(&occupation.code_2004, widths.code),
        pad_right(&occupation.division, widths.hierarchy),
        pad_right(&occupation.subdivision, widths.hierarchy),
        pad_right(&occupation.group, widths.hierarchy),
        pad_right(&occupation.family, widths.hierarchy),
    ];
    out.push_str(&cells.join(GAP));

    if widths.score > 0 {
        out.push_str(GAP);
        out.push_str(&Theme::fg(&theme.colors.score_fg));
        out.push_str(&pad_left(&occupation.score_label(), widths.score));
    }

    out.push_str(Theme::reset());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_fill_the_terminal() {
        let widths = ColumnWidths::compute(160, true);
        let used = widths.ordinal + widths.title + widths.code * 2 + widths.hierarchy * 4 + widths.score + 8;
        assert!(used <= 160);
        assert!(widths.title > widths.hierarchy);
    }

    #[test]
    fn similarity_column_only_in_semantic_mode() {
        assert_eq!(ColumnWidths::compute(120, false).score, 0);
        assert_eq!(ColumnWidths::compute(120, true).score, SCORE_WIDTH);
    }

    #[test]
    fn narrow_terminals_keep_minimum_widths() {
        let widths = ColumnWidths::compute(20, false);
        assert_eq!(widths.hierarchy, 4);
        assert_eq!(widths.title, 8);
    }
}
