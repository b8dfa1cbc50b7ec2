//! Unicode text segmentation and monospace display width.
//!
//! Grapheme cluster, word and sentence boundaries follow UAX #29, line break
//! opportunities follow UAX #14. Widths are the number of terminal columns a
//! grapheme cluster occupies.
//!
//! All functions accept `&str` as well as raw bytes, invalid utf8 is
//! segmented as replacement characters.

mod chars;
mod error;
mod grapheme;
mod line;
mod options;
mod segment;
mod segmenter;
mod sentence;
mod width;
mod word;

pub use chars::{Chars, REPLACEMENT_CHAR};
pub use error::SegmentError;
pub use grapheme::{graphemes, GraphemeBreaker, Graphemes};
pub use line::{
    is_line_terminator, line_breaks, line_segments, BreakOpportunity, LineBreaker, LineBreaks,
    LineSegments,
};
pub use options::{Options, SentenceOptions};
pub use segment::{Breaker, Segment};
pub use segmenter::{ClusterStep, Segmenter, Step, Stepper, Unit};
pub use sentence::{sentences, sentences_with, SentenceBreaker, Sentences};
pub use width::{char_width, cluster_width, AmbiguousWidth, WidthOptions};
pub use word::{words, WordBreaker, Words};

pub use termseg_ucd as ucd;

/// Display width of `text`, the sum of its grapheme cluster widths
pub fn width<T: AsRef<[u8]> + ?Sized>(text: &T) -> usize {
    width_with(text, &WidthOptions::default())
}

pub fn width_with<T: AsRef<[u8]> + ?Sized>(text: &T, options: &WidthOptions) -> usize {
    graphemes(text)
        .map(|g| cluster_width(g.chars(), options))
        .sum()
}

pub fn grapheme_count<T: AsRef<[u8]> + ?Sized>(text: &T) -> usize {
    graphemes(text).count()
}

/// Reverse `text` keeping grapheme clusters intact
pub fn reverse(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let clusters: Vec<Segment> = graphemes(text).collect();
    for cluster in clusters.iter().rev() {
        result.push_str(&text[cluster.range()]);
    }
    result
}

/// Whether `text` ends in a mandatory line break, like a newline
pub fn has_trailing_line_break<T: AsRef<[u8]> + ?Sized>(text: &T) -> bool {
    let bytes = text.as_ref();
    // Last character is at most 4 bytes long
    let mut start = bytes.len().saturating_sub(4);
    while start < bytes.len() && is_continuation(bytes[start]) {
        start += 1;
    }

    Chars::new(&bytes[start..])
        .last()
        .map_or(false, |(_, _, ch)| is_line_terminator(ch))
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn string_width() {
        assert_eq!(0, width(""));
        assert_eq!(3, width("abc"));
        assert_eq!(5, width("a간🇩🇪"));
        assert_eq!(2, width("🏳️‍🌈"));
        assert_eq!(2, width_with("±", &WidthOptions::wide()));
    }

    #[test]
    fn malformed_width() {
        assert_eq!(1, width(b"\xFF"));
        assert_eq!(1, width_with(b"\xFF", &WidthOptions::wide()));
        assert_eq!(3, width_with(b"a\xE2\x80b", &WidthOptions::wide()));
    }

    #[test]
    fn count() {
        assert_eq!(3, grapheme_count("abc"));
        assert_eq!(1, grapheme_count("🏳️‍🌈"));
        assert_eq!(2, grapheme_count(b"a\xFF"));
    }

    #[test]
    fn reversed() {
        assert_eq!("cba", reverse("abc"));
        assert_eq!("🇫🇮e\u{0301}a", reverse("ae\u{0301}🇫🇮"));
        assert_eq!("", reverse(""));
    }

    #[test]
    fn trailing_line_break() {
        assert!(has_trailing_line_break("a\n"));
        assert!(has_trailing_line_break("a\r\n"));
        assert!(has_trailing_line_break("a\r"));
        assert!(has_trailing_line_break("a\u{2028}"));
        assert!(has_trailing_line_break("a\u{0085}"));
        assert!(!has_trailing_line_break("a"));
        assert!(!has_trailing_line_break("a\n "));
        assert!(!has_trailing_line_break(""));
        assert!(!has_trailing_line_break(b"\n\xE2\x80"));
    }
}
