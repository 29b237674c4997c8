//! Character-based text helpers for fixed-width output.
//!
//! Widths are counted in `char`s. Wrapping is a hard cut every `width`
//! characters with no word-break awareness.

/// Replace control characters (newlines, tabs, escapes) with spaces so a
/// value always stays on the physical line it is printed on.
pub fn sanitize(text: &str) -> String {
    text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect()
}

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split `text` into chunks of `width` characters.
///
/// A continuation chunk that starts with a space has that one space removed.
/// Empty text yields a single empty chunk, and text that exactly fills a
/// multiple of `width` yields no trailing empty chunk.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }

    chars
        .chunks(width)
        .enumerate()
        .map(|(index, chunk)| match chunk.split_first() {
            Some((&' ', rest)) if index > 0 => rest.iter().collect(),
            _ => chunk.iter().collect(),
        })
        .collect()
}

/// Left-align `text` in a field of `width` characters
pub fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap("milk", 10), vec!["milk"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_hard_cuts() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_exact_fill_has_no_trailing_chunk() {
        assert_eq!(wrap("abcdefgh", 4), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_trims_one_leading_space_on_continuation() {
        assert_eq!(wrap("abcd  efg", 4), vec!["abcd", " ef", "g"]);
        assert_eq!(wrap(" abc", 4), vec![" abc"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap("ééééé", 2), vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("a\nb\tc"), "a b c");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(char_len(&pad("✓", 3)), 3);
    }
}
