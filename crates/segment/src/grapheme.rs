use termseg_ucd::{grapheme_break, indic_conjunct_break, GraphemeBreak, IndicConjunctBreak, Property};

use crate::{
    chars::Chars,
    segment::{Breaker, Segment, Split},
};

/// Iterate over the extended grapheme clusters of `text`
pub fn graphemes<T: AsRef<[u8]> + ?Sized>(text: &T) -> Graphemes<'_> {
    Graphemes {
        split: Split::new(text.as_ref(), GraphemeBreaker::new()),
    }
}

#[derive(Debug, Clone)]
pub struct Graphemes<'a> {
    split: Split<'a, GraphemeBreaker>,
}

impl<'a> Graphemes<'a> {
    /// Byte position where the next grapheme starts
    pub fn pos(&self) -> usize {
        self.split.pos()
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let (segment, _) = self.split.next_segment()?;
        Some(segment)
    }
}

impl<'a> std::iter::FusedIterator for Graphemes<'a> {}

/// State of a possible emoji zwj sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmojiState {
    None,
    /// Seen ExtPict Extend*
    Pictographic,
    /// Seen ExtPict Extend* ZWJ
    Joined,
}

/// State of a possible indic conjunct sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConjunctState {
    None,
    /// Seen Consonant [Extend Linker]*, without a linker
    Consonant,
    /// Seen Consonant [Extend Linker]* Linker [Extend Linker]*
    Linked,
}

/// Grapheme cluster boundary state machine.
///
/// Fed one code point at a time, keeps only the context needed by the rules
/// that look further back than one code point: emoji zwj sequences, regional
/// indicator pairs and indic conjuncts.
#[derive(Debug, Clone)]
pub struct GraphemeBreaker {
    prev: Option<GraphemeBreak>,
    emoji: EmojiState,
    conjunct: ConjunctState,
    /// Number of consecutive regional indicators before the current position
    ri_count: usize,
}

impl GraphemeBreaker {
    pub fn new() -> GraphemeBreaker {
        GraphemeBreaker {
            prev: None,
            emoji: EmojiState::None,
            conjunct: ConjunctState::None,
            ri_count: 0,
        }
    }

    /// Feed the next code point, returns whether there is a grapheme cluster
    /// boundary before it.
    pub fn feed(&mut self, ch: char) -> bool {
        let gbreak = grapheme_break(ch);
        let pictographic = Property::ExtendedPictographic.check(ch);
        let incb = indic_conjunct_break(ch);

        let is_break = match self.prev {
            Some(prev) => self.pair_break(prev, gbreak, pictographic, incb),
            // GB1
            None => false,
        };

        self.emoji = match (self.emoji, gbreak) {
            _ if pictographic => EmojiState::Pictographic,
            (EmojiState::Pictographic, GraphemeBreak::Extend) => EmojiState::Pictographic,
            (EmojiState::Pictographic, GraphemeBreak::ZWJ) => EmojiState::Joined,
            _ => EmojiState::None,
        };

        self.conjunct = match (self.conjunct, incb) {
            (_, IndicConjunctBreak::Consonant) => ConjunctState::Consonant,
            (ConjunctState::None, _) => ConjunctState::None,
            (_, IndicConjunctBreak::Linker) => ConjunctState::Linked,
            (state, IndicConjunctBreak::Extend) => state,
            _ => ConjunctState::None,
        };

        if gbreak == GraphemeBreak::RegionalIndicator {
            self.ri_count += 1;
        } else {
            self.ri_count = 0;
        }

        self.prev = Some(gbreak);
        is_break
    }

    // https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundary_Rules
    /// Check if a grapheme break exists between the previous and the next
    /// character
    fn pair_break(
        &self,
        before: GraphemeBreak,
        after: GraphemeBreak,
        pictographic: bool,
        incb: IndicConjunctBreak,
    ) -> bool {
        use GraphemeBreak::*;

        match (before, after) {
            (CR, LF) => false,              // GB 3
            (Control | CR | LF, _) => true, // GB 4
            (_, Control | CR | LF) => true, // GB 5
            (L, L | V | LV | LVT) => false, // GB 6
            (LV | V, V | T) => false,       // GB 7
            (LVT | T, T) => false,          // GB 8
            (_, Extend | ZWJ) => false,     // GB 9
            (_, SpacingMark) => false,      // GB 9a
            (Prepend, _) => false,          // GB 9b
            _ if incb == IndicConjunctBreak::Consonant
                && self.conjunct == ConjunctState::Linked =>
            {
                false // GB 9c
            }
            (ZWJ, _) if pictographic && self.emoji == EmojiState::Joined => false, // GB 11
            (RegionalIndicator, RegionalIndicator) => self.ri_count % 2 == 0, // GB 12, GB 13
            (_, _) => true, // GB 999
        }
    }
}

impl Default for GraphemeBreaker {
    fn default() -> Self {
        GraphemeBreaker::new()
    }
}

impl Breaker for GraphemeBreaker {
    type Decision = bool;

    fn decide(&mut self, ch: char, _rest: &Chars<'_>) -> bool {
        self.feed(ch)
    }

    fn is_break(decision: bool) -> bool {
        decision
    }

    fn end_of_text() -> bool {
        // GB 2
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn clusters(text: &str) -> Vec<&str> {
        graphemes(text)
            .map(|g| g.as_str().expect("valid utf8"))
            .collect()
    }

    #[test]
    fn grapheme_iter_next() {
        const CONTENT: &str = "❤🤍🥳❤️간÷나는산다⛄😮‍💨🇫🇮";

        let boundaries = [3, 7, 11, 17, 20, 22, 25, 28, 31, 34, 37, 48, 56, 56];
        let mut graphemes = graphemes(CONTENT);
        let mut pos = 0;

        for boundary in boundaries {
            if let Some(g) = graphemes.next() {
                assert_eq!(pos, g.start());
                pos += g.len();
            }
            assert_eq!(boundary, pos);
            assert_eq!(boundary, graphemes.pos());
        }
    }

    #[test]
    fn empty() {
        assert!(graphemes("").next().is_none());
    }

    #[test]
    fn crlf() {
        assert_eq!(vec!["a", "\r\n", "b"], clusters("a\r\nb"));
        assert_eq!(vec!["\r", "\r\n", "\n"], clusters("\r\r\n\n"));
        assert_eq!(vec!["\t", "\u{0301}"], clusters("\t\u{0301}"));
    }

    #[test]
    fn combining() {
        assert_eq!(vec!["e\u{0301}\u{0302}", "x"], clusters("e\u{0301}\u{0302}x"));
        // Spacing mark
        assert_eq!(vec!["क\u{093F}"], clusters("क\u{093F}"));
        // Prepend
        assert_eq!(vec!["\u{0600}1", "2"], clusters("\u{0600}12"));
    }

    #[test]
    fn hangul() {
        assert_eq!(vec!["\u{1100}\u{1161}\u{11A8}"], clusters("\u{1100}\u{1161}\u{11A8}"));
        assert_eq!(vec!["간", "나"], clusters("간나"));
        assert_eq!(vec!["가\u{11A8}"], clusters("가\u{11A8}"));
    }

    #[test]
    fn regional_indicators() {
        assert_eq!(vec!["🇩🇪"], clusters("🇩🇪"));
        assert_eq!(vec!["🇩🇪", "🇫"], clusters("🇩🇪🇫"));
        assert_eq!(vec!["🇩🇪", "🇫🇮"], clusters("🇩🇪🇫🇮"));
        assert_eq!(vec!["a", "🇩🇪", "🇫"], clusters("a🇩🇪🇫"));
    }

    #[test]
    fn emoji_sequences() {
        assert_eq!(vec!["🏳️‍🌈"], clusters("🏳️‍🌈"));
        assert_eq!(vec!["👨‍👩‍👧", "x"], clusters("👨‍👩‍👧x"));
        assert_eq!(vec!["👍🏻"], clusters("👍🏻"));
    }

    #[test]
    fn zwj_without_pictographic() {
        assert_eq!(vec!["a\u{200D}"], clusters("a\u{200D}"));
        assert_eq!(vec!["\u{200D}"], clusters("\u{200D}"));
        assert_eq!(vec!["a\u{200D}", "b"], clusters("a\u{200D}b"));
        assert_eq!(vec!["a\u{200D}", "🌈"], clusters("a\u{200D}🌈"));
        assert_eq!(vec!["🌈\u{200D}", "b"], clusters("🌈\u{200D}b"));
    }

    #[test]
    fn indic_conjuncts() {
        assert_eq!(vec!["क्षि"], clusters("क्षि"));
        assert_eq!(vec!["क्\u{200D}ष"], clusters("क्\u{200D}ष"));
        assert_eq!(vec!["क", "ष"], clusters("कष"));
        // Virama without a preceding consonant does not link
        assert_eq!(vec!["a\u{094D}", "ष"], clusters("a\u{094D}ष"));
    }

    #[test]
    fn invalid_utf8() {
        let text = b"a\xFF\xCC\x81b";
        let clusters: Vec<&[u8]> = graphemes(text).map(|g| g.as_bytes()).collect();
        let expected: Vec<&[u8]> = vec![b"a", b"\xFF\xCC\x81", b"b"];
        assert_eq!(expected, clusters);
    }

    #[test]
    fn breaker_first_char_never_breaks() {
        let mut breaker = GraphemeBreaker::new();
        assert!(!breaker.feed('\n'));
        assert!(breaker.feed('a'));
        assert!(!breaker.feed('\u{0301}'));
    }
}
