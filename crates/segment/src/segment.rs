use std::{fmt::Display, ops::Range};

use crate::{
    chars::Chars,
    grapheme::graphemes,
    width::{cluster_width, WidthOptions},
};

/// A boundary delimited part of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    start: usize,
    text: &'a [u8],
}

impl<'a> Segment<'a> {
    pub(crate) fn new(start: usize, text: &'a [u8]) -> Segment<'a> {
        Segment { start, text }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.text
    }

    /// The segment as a string slice, `None` if it contains invalid utf8
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.text).ok()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + 'a {
        Chars::new(self.text).map(|(_, _, ch)| ch)
    }

    /// Display width of the segment, sum of its grapheme cluster widths
    pub fn width(&self) -> usize {
        self.width_with(&WidthOptions::default())
    }

    pub fn width_with(&self, options: &WidthOptions) -> usize {
        graphemes(self.text)
            .map(|g| cluster_width(g.chars(), options))
            .sum()
    }
}

impl<'a> Display for Segment<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }

        Ok(())
    }
}

impl<'a> AsRef<[u8]> for Segment<'a> {
    fn as_ref(&self) -> &[u8] {
        self.text
    }
}

impl<'a> PartialEq<&str> for Segment<'a> {
    fn eq(&self, other: &&str) -> bool {
        other.as_bytes() == self.text
    }
}

/// A boundary engine fed one code point at a time.
pub trait Breaker {
    type Decision: Copy;

    /// Feed the next code point. `rest` continues right after `ch` and may be
    /// cloned to look ahead. Returns the decision for the position before
    /// `ch`, the first code point of the stream never has a boundary before
    /// it.
    fn decide(&mut self, ch: char, rest: &Chars<'_>) -> Self::Decision;

    /// Whether the decision ends a segment
    fn is_break(decision: Self::Decision) -> bool;

    /// Decision at the end of text
    fn end_of_text() -> Self::Decision;
}

/// Splits text into segments using a breaker
#[derive(Debug, Clone)]
pub(crate) struct Split<'a, B: Breaker> {
    text: &'a [u8],
    chars: Chars<'a>,
    breaker: B,
    start: usize,
}

impl<'a, B: Breaker> Split<'a, B> {
    pub(crate) fn new(text: &'a [u8], breaker: B) -> Split<'a, B> {
        Split {
            text,
            chars: Chars::new(text),
            breaker,
            start: 0,
        }
    }

    /// Position where the next segment starts
    pub(crate) fn pos(&self) -> usize {
        self.start
    }

    pub(crate) fn next_segment(&mut self) -> Option<(Segment<'a>, B::Decision)> {
        if self.start >= self.text.len() {
            return None;
        }

        while let Some((start, _, ch)) = self.chars.next() {
            let decision = self.breaker.decide(ch, &self.chars);
            if start > self.start && B::is_break(decision) {
                let segment = Segment::new(self.start, &self.text[self.start..start]);
                self.start = start;
                return Some((segment, decision));
            }
        }

        let segment = Segment::new(self.start, &self.text[self.start..]);
        self.start = self.text.len();
        Some((segment, B::end_of_text()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn segment_accessors() {
        let text = "héllo";
        let segment = Segment::new(1, &text.as_bytes()[1..3]);
        assert_eq!(1, segment.start());
        assert_eq!(3, segment.end());
        assert_eq!(1..3, segment.range());
        assert_eq!(Some("é"), segment.as_str());
        assert_eq!("é", segment.to_string());
        assert!(segment == "é");
        assert_eq!(1, segment.width());
    }

    #[test]
    fn invalid_display() {
        let segment = Segment::new(0, b"a\xFF");
        assert_eq!(None, segment.as_str());
        assert_eq!("a\u{FFFD}", segment.to_string());
    }
}
