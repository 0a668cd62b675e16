//! Lyric pagination
//!
//! Lyrics are stored as one text blob with stanzas separated by a blank
//! line. A stanza is the literal text between delimiters, single newlines
//! included.

use crate::pagination::PageWindow;

/// Stanza delimiter (blank line)
pub const STANZA_DELIMITER: &str = "\n\n";

/// Split lyrics into stanzas
pub fn split_stanzas(text: &str) -> Vec<&str> {
    text.split(STANZA_DELIMITER).collect()
}

/// Return the stanzas on `page` (1-indexed) with `page_size` stanzas per page
///
/// A page past the last stanza yields an empty list. Pages below 1 are
/// treated as page 1.
///
/// # Examples
/// ```
/// use mlib_catalog::lyrics::paginate_lyrics;
///
/// assert_eq!(paginate_lyrics("A\n\nB\n\nC", 2, 1), vec!["B"]);
/// assert!(paginate_lyrics("A\n\nB", 5, 1).is_empty());
/// ```
pub fn paginate_lyrics(text: &str, page: i64, page_size: i64) -> Vec<String> {
    let window = PageWindow::new(page, page_size);

    split_stanzas(text)
        .into_iter()
        .skip(window.start_index())
        .take(window.page_len())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LYRICS: &str = "Line one\nLine two\n\nChorus\n\nVerse two\nend";

    #[test]
    fn test_split_keeps_single_newlines() {
        let stanzas = split_stanzas(LYRICS);
        assert_eq!(stanzas, vec!["Line one\nLine two", "Chorus", "Verse two\nend"]);
    }

    #[test]
    fn test_second_page_of_one() {
        assert_eq!(paginate_lyrics("A\n\nB\n\nC", 2, 1), vec!["B"]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        assert!(paginate_lyrics("A\n\nB", 5, 1).is_empty());
        assert!(paginate_lyrics("A\n\nB", 2, 2).is_empty());
    }

    #[test]
    fn test_last_page_is_truncated() {
        assert_eq!(paginate_lyrics(LYRICS, 2, 2), vec!["Verse two\nend"]);
    }

    #[test]
    fn test_page_size_larger_than_text() {
        assert_eq!(paginate_lyrics("A\n\nB", 1, 50), vec!["A", "B"]);
    }

    #[test]
    fn test_page_zero_behaves_like_first_page() {
        assert_eq!(paginate_lyrics("A\n\nB", 0, 1), vec!["A"]);
    }

    #[test]
    fn test_text_without_delimiter_is_one_stanza() {
        assert_eq!(paginate_lyrics("just one\nstanza", 1, 1), vec!["just one\nstanza"]);
    }

    #[test]
    fn test_triple_newline_leaves_leading_newline_in_next_stanza() {
        assert_eq!(split_stanzas("A\n\n\nB"), vec!["A", "\nB"]);
    }
}
