//! Header component renderer.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;

/// Title shown on the first line of every frame.
pub const TITLE: &str = "NCO Occupation Search";

/// Appends the centered, bold title line.
///
/// # Example
///
/// ```text
///                              NCO Occupation Search
/// ```
pub fn render_header(out: &mut String, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&center(TITLE, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
