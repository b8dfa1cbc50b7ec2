use termseg_ucd::{word_break, Property, WordBreak};

use crate::{
    chars::Chars,
    segment::{Breaker, Segment, Split},
};

/// Iterate over the words of `text`. Every part of the text is returned,
/// including whitespace and punctuation between words.
pub fn words<T: AsRef<[u8]> + ?Sized>(text: &T) -> Words<'_> {
    Words {
        split: Split::new(text.as_ref(), WordBreaker::new()),
    }
}

#[derive(Debug, Clone)]
pub struct Words<'a> {
    split: Split<'a, WordBreaker>,
}

impl<'a> Iterator for Words<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let (segment, _) = self.split.next_segment()?;
        Some(segment)
    }
}

impl<'a> std::iter::FusedIterator for Words<'a> {}

/// Characters ignored by WB4
fn is_ignorable(wbreak: WordBreak) -> bool {
    matches!(wbreak, WordBreak::Extend | WordBreak::Format | WordBreak::ZWJ)
}

fn is_ahletter(wbreak: WordBreak) -> bool {
    matches!(wbreak, WordBreak::ALetter | WordBreak::HebrewLetter)
}

/// Word boundary state machine.
///
/// Extend, Format and ZWJ are transparent to the rules after WB4 so the
/// breaker tracks the last two significant classes separately from the class
/// of the previous code point.
#[derive(Debug, Clone)]
pub struct WordBreaker {
    /// Class of the previous code point
    prev: Option<WordBreak>,
    /// Last class not ignored by WB4
    last: WordBreak,
    /// Significant class before `last`
    before_last: Option<WordBreak>,
    /// Number of consecutive significant regional indicators
    ri_count: usize,
}

impl WordBreaker {
    pub fn new() -> WordBreaker {
        WordBreaker {
            prev: None,
            last: WordBreak::Any,
            before_last: None,
            ri_count: 0,
        }
    }

    /// Feed the next code point, returns whether there is a word boundary
    /// before it. `rest` is the text after `ch`.
    pub fn feed(&mut self, ch: char, rest: &Chars<'_>) -> bool {
        let wbreak = word_break(ch);
        let is_break = match self.prev {
            Some(prev) => self.is_break(prev, wbreak, ch, rest),
            // WB1
            None => false,
        };

        let transparent = is_ignorable(wbreak)
            && !matches!(
                self.prev,
                None | Some(WordBreak::CR | WordBreak::LF | WordBreak::Newline)
            );

        if !transparent {
            if wbreak == WordBreak::RegionalIndicator {
                self.ri_count += 1;
            } else {
                self.ri_count = 0;
            }

            self.before_last = self.prev.map(|_| self.last);
            self.last = wbreak;
        }

        self.prev = Some(wbreak);
        is_break
    }

    // https://www.unicode.org/reports/tr29/#Word_Boundary_Rules
    fn is_break(&self, prev: WordBreak, next: WordBreak, ch: char, rest: &Chars<'_>) -> bool {
        use WordBreak::*;

        match (prev, next) {
            (CR, LF) => return false,                   // WB 3
            (Newline | CR | LF, _) => return true,      // WB 3a
            (_, Newline | CR | LF) => return true,      // WB 3b
            (ZWJ, _) if Property::ExtendedPictographic.check(ch) => return false, // WB 3c
            (WSegSpace, WSegSpace) => return false,     // WB 3d
            (_, Extend | Format | ZWJ) => return false, // WB 4
            _ => {}
        }

        let last = self.last;
        let before_last = self.before_last;

        match (last, next) {
            (ALetter | HebrewLetter, ALetter | HebrewLetter) => false, // WB 5
            (ALetter | HebrewLetter, MidLetter | MidNumLet | SingleQuote)
                if next_significant(rest).map_or(false, is_ahletter) =>
            {
                false // WB 6
            }
            (MidLetter | MidNumLet | SingleQuote, ALetter | HebrewLetter)
                if before_last.map_or(false, is_ahletter) =>
            {
                false // WB 7
            }
            (HebrewLetter, SingleQuote) => false, // WB 7a
            (HebrewLetter, DoubleQuote) if next_significant(rest) == Some(HebrewLetter) => {
                false // WB 7b
            }
            (DoubleQuote, HebrewLetter) if before_last == Some(HebrewLetter) => false, // WB 7c
            (Numeric, Numeric) => false,                                            // WB 8
            (ALetter | HebrewLetter, Numeric) => false,                             // WB 9
            (Numeric, ALetter | HebrewLetter) => false,                             // WB 10
            (MidNum | MidNumLet | SingleQuote, Numeric) if before_last == Some(Numeric) => {
                false // WB 11
            }
            (Numeric, MidNum | MidNumLet | SingleQuote)
                if next_significant(rest) == Some(Numeric) =>
            {
                false // WB 12
            }
            (Katakana, Katakana) => false, // WB 13
            (ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet, ExtendNumLet) => {
                false // WB 13a
            }
            (ExtendNumLet, ALetter | HebrewLetter | Numeric | Katakana) => false, // WB 13b
            (RegionalIndicator, RegionalIndicator) => self.ri_count % 2 == 0,      // WB 15, WB 16
            _ => true, // WB 999
        }
    }
}

/// Class of the next code point not ignored by WB4
fn next_significant(rest: &Chars<'_>) -> Option<WordBreak> {
    rest.clone()
        .map(|(_, _, ch)| word_break(ch))
        .find(|wbreak| !is_ignorable(*wbreak))
}

impl Default for WordBreaker {
    fn default() -> Self {
        WordBreaker::new()
    }
}

impl Breaker for WordBreaker {
    type Decision = bool;

    fn decide(&mut self, ch: char, rest: &Chars<'_>) -> bool {
        self.feed(ch, rest)
    }

    fn is_break(decision: bool) -> bool {
        decision
    }

    fn end_of_text() -> bool {
        // WB 2
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        words(text).map(|w| w.as_str().expect("valid utf8")).collect()
    }

    #[test]
    fn sentence() {
        assert_eq!(
            vec!["Hello", ",", " ", "world", "!"],
            split("Hello, world!")
        );
        assert_eq!(vec!["The", "  ", "quick", "\t", "fox"], split("The  quick\tfox"));
    }

    #[test]
    fn apostrophes_and_numbers() {
        assert_eq!(vec!["can't", " ", "stop"], split("can't stop"));
        assert_eq!(vec!["3.14", " ", "1,000,000"], split("3.14 1,000,000"));
        assert_eq!(vec!["a1b2"], split("a1b2"));
        assert_eq!(vec!["end", "."], split("end."));
        assert_eq!(vec!["'", "quoted", "'"], split("'quoted'"));
        assert_eq!(vec!["1", ".", "a"], split("1.a"));
    }

    #[test]
    fn number_signs() {
        // Arabic number sign and end of ayah are numeric
        assert_eq!(vec!["\u{0600}12"], split("\u{0600}12"));
        assert_eq!(vec!["\u{06DD}3", " ", "x"], split("\u{06DD}3 x"));
        assert_eq!(vec!["a\u{070F}b"], split("a\u{070F}b"));
    }

    #[test]
    fn extend_is_transparent() {
        assert_eq!(vec!["e\u{0301}x"], split("e\u{0301}x"));
        assert_eq!(vec!["a\u{00AD}.\u{0301}b"], split("a\u{00AD}.\u{0301}b"));
        assert_eq!(vec!["\n", "\u{0301}", "a"], split("\n\u{0301}a"));
    }

    #[test]
    fn newlines() {
        assert_eq!(vec!["a", "\r\n", "b"], split("a\r\nb"));
        assert_eq!(vec!["\n", "\n"], split("\n\n"));
    }

    #[test]
    fn katakana_and_connectors() {
        assert_eq!(vec!["カタカナ"], split("カタカナ"));
        assert_eq!(vec!["snake_case_1"], split("snake_case_1"));
        assert_eq!(vec!["日", "本"], split("日本"));
    }

    #[test]
    fn hebrew() {
        assert_eq!(vec!["א\"ב"], split("א\"ב"));
        assert_eq!(vec!["א'"], split("א'"));
    }

    #[test]
    fn emoji() {
        assert_eq!(vec!["🇩🇪", "🇫🇮", "🇫"], split("🇩🇪🇫🇮🇫"));
        assert_eq!(vec!["👩‍👩"], split("👩‍👩"));
        assert_eq!(vec!["🥳", "🥳"], split("🥳🥳"));
    }
}
