//! Shared rendering utilities.
//!
//! All width arithmetic is done in characters, not bytes, so titles with
//! non-ASCII text (Devanagari occupation names, curly quotes) stay aligned.

/// Number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, marking the cut with `…`.
///
/// # Example
///
/// ```rust
/// use ncosearch::ui::helpers::truncate;
///
/// assert_eq!(truncate("Medical Officer", 8), "Medical…");
/// assert_eq!(truncate("Medic", 8), "Medic");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Truncates and then left-aligns `text` in a field of `width` characters.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(char_width(&cut));
    format!("{cut}{}", " ".repeat(fill))
}

/// Right-aligns `text` in a field of `width` characters.
#[must_use]
pub fn pad_left(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let fill = width.saturating_sub(char_width(&cut));
    format!("{}{cut}", " ".repeat(fill))
}

/// Centers `text` in a line of `width` characters. Left padding is the
/// smaller half.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = char_width(&cut);
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(left + len);
    format!("{}{cut}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("चिकित्सक", 3), "चि…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn padding_fills_exact_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(char_width(&pad_right("Nursing Assistant", 7)), 7);
    }

    #[test]
    fn center_puts_extra_space_on_the_right() {
        assert_eq!(center("ab", 5), " ab  ");
    }
}
