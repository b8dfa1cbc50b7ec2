use std::sync::Arc;

use rustc_hash::FxHashSet;
use termseg_ucd::{sentence_break, SentenceBreak};

use crate::{
    chars::Chars,
    options::SentenceOptions,
    segment::{Breaker, Segment, Split},
};

/// Iterate over the sentences of `text` using the default abbreviations
pub fn sentences<T: AsRef<[u8]> + ?Sized>(text: &T) -> Sentences<'_> {
    sentences_with(text, &SentenceOptions::default())
}

pub fn sentences_with<'a, T: AsRef<[u8]> + ?Sized>(
    text: &'a T,
    options: &SentenceOptions,
) -> Sentences<'a> {
    Sentences {
        split: Split::new(text.as_ref(), SentenceBreaker::new(options)),
    }
}

#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    split: Split<'a, SentenceBreaker>,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let (segment, _) = self.split.next_segment()?;
        Some(segment)
    }
}

impl<'a> std::iter::FusedIterator for Sentences<'a> {}

/// Where we are in a SATerm Close* Sp* sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Term,
    Close,
    Sp,
}

/// A sentence terminator and what has followed it
#[derive(Debug, Clone, Copy)]
struct Terminator {
    /// ATerm, otherwise STerm
    aterm: bool,
    phase: Phase,
    /// ATerm preceded by Upper or Lower
    cased_before: bool,
    /// Token ending in the ATerm is a known abbreviation
    abbreviation: bool,
}

fn is_para_sep(sbreak: SentenceBreak) -> bool {
    matches!(
        sbreak,
        SentenceBreak::Sep | SentenceBreak::CR | SentenceBreak::LF
    )
}

/// Sentence boundary state machine.
///
/// Instead of looking back through Sp* Close* runs the breaker carries the
/// state of the latest terminator forward. A break the rules would make after
/// an abbreviation such as "Mr." is suppressed.
#[derive(Debug, Clone)]
pub struct SentenceBreaker {
    /// Class of the previous code point
    prev: Option<SentenceBreak>,
    /// Last class not ignored by SB5
    last: SentenceBreak,
    term: Option<Terminator>,

    abbreviations: Arc<FxHashSet<String>>,
    /// Longest abbreviation in bytes
    max_abbreviation: usize,
    /// Current whitespace delimited token, up to `max_abbreviation` bytes
    token: String,
    token_overflow: bool,

    /// Result of the latest SB8 scan, and the position of the code point
    /// that decided it
    lookahead: Option<(usize, bool)>,
}

impl SentenceBreaker {
    pub fn new(options: &SentenceOptions) -> SentenceBreaker {
        let abbreviations = options.abbreviations.clone();
        let max_abbreviation = abbreviations.iter().map(String::len).max().unwrap_or(0);

        SentenceBreaker {
            prev: None,
            last: SentenceBreak::Any,
            term: None,
            abbreviations,
            max_abbreviation,
            token: String::with_capacity(max_abbreviation),
            token_overflow: false,
            lookahead: None,
        }
    }

    /// Feed the next code point, returns whether there is a sentence boundary
    /// before it. `rest` is the text after `ch`.
    pub fn feed(&mut self, ch: char, rest: &Chars<'_>) -> bool {
        let sbreak = sentence_break(ch);
        let is_break = match self.prev {
            Some(prev) => self.is_break(prev, sbreak, rest),
            // SB1
            None => false,
        };

        self.push_token(ch, sbreak);

        let transparent = matches!(sbreak, SentenceBreak::Extend | SentenceBreak::Format)
            && !self.prev.map_or(true, is_para_sep);

        if !transparent {
            self.update_terminator(sbreak);
            self.last = sbreak;
        }

        self.prev = Some(sbreak);
        is_break
    }

    // https://www.unicode.org/reports/tr29/#Sentence_Boundary_Rules
    fn is_break(&mut self, prev: SentenceBreak, next: SentenceBreak, rest: &Chars<'_>) -> bool {
        use SentenceBreak::*;

        match (prev, next) {
            (CR, LF) => return false,             // SB 3
            (Sep | CR | LF, _) => return true,    // SB 4
            (_, Extend | Format) => return false, // SB 5
            _ => {}
        }

        let term = match self.term {
            Some(term) => term,
            // SB 998
            None => return false,
        };
        let closed = matches!(term.phase, Phase::Term | Phase::Close);

        match next {
            Numeric if term.aterm && term.phase == Phase::Term => false, // SB 6
            Upper if term.aterm && term.phase == Phase::Term && term.cased_before => false, // SB 7
            _ if term.aterm && self.lower_follows(next, rest) => false, // SB 8
            SContinue | ATerm | STerm => false,                         // SB 8a
            Close if closed => false,                                   // SB 9
            Sp | Sep | CR | LF => false,                                // SB 9, SB 10
            _ if term.abbreviation => false,
            _ => true, // SB 11
        }
    }

    /// SB8: ( ¬(OLetter | Upper | Lower | ParaSep | SATerm) )* Lower follows
    fn lower_follows(&mut self, next: SentenceBreak, rest: &Chars<'_>) -> bool {
        use SentenceBreak::*;

        match next {
            Lower => return true,
            OLetter | Upper | Sep | CR | LF | ATerm | STerm => return false,
            _ => {}
        }

        if let Some((decided_at, lower)) = self.lookahead {
            if rest.pos() <= decided_at {
                return lower;
            }
        }

        let mut result = (rest.as_bytes().len(), false);
        for (start, _, ch) in rest.clone() {
            match sentence_break(ch) {
                Lower => {
                    result = (start, true);
                    break;
                }
                OLetter | Upper | Sep | CR | LF | ATerm | STerm => {
                    result = (start, false);
                    break;
                }
                _ => {}
            }
        }

        self.lookahead = Some(result);
        result.1
    }

    fn update_terminator(&mut self, sbreak: SentenceBreak) {
        use SentenceBreak::*;

        self.term = match (self.term, sbreak) {
            (_, ATerm | STerm) => {
                let aterm = sbreak == ATerm;
                Some(Terminator {
                    aterm,
                    phase: Phase::Term,
                    cased_before: matches!(self.last, Upper | Lower),
                    abbreviation: aterm && self.is_abbreviation(),
                })
            }
            (Some(term), Close) if term.phase != Phase::Sp => Some(Terminator {
                phase: Phase::Close,
                ..term
            }),
            (Some(term), Sp) => Some(Terminator {
                phase: Phase::Sp,
                ..term
            }),
            _ => None,
        };
    }

    fn push_token(&mut self, ch: char, sbreak: SentenceBreak) {
        if sbreak == SentenceBreak::Sp || is_para_sep(sbreak) {
            self.token.clear();
            self.token_overflow = false;
            return;
        }

        // Leading closing punctuation, like "(" or a quote, is not part of
        // the token
        if sbreak == SentenceBreak::Close && self.token.is_empty() {
            return;
        }

        if self.token.len() + ch.len_utf8() <= self.max_abbreviation {
            self.token.push(ch);
        } else {
            self.token_overflow = true;
        }
    }

    fn is_abbreviation(&self) -> bool {
        !self.token_overflow && self.abbreviations.contains(self.token.as_str())
    }
}

impl Default for SentenceBreaker {
    fn default() -> Self {
        SentenceBreaker::new(&SentenceOptions::default())
    }
}

impl Breaker for SentenceBreaker {
    type Decision = bool;

    fn decide(&mut self, ch: char, rest: &Chars<'_>) -> bool {
        self.feed(ch, rest)
    }

    fn is_break(decision: bool) -> bool {
        decision
    }

    fn end_of_text() -> bool {
        // SB 2
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        sentences(text)
            .map(|s| s.as_str().expect("valid utf8"))
            .collect()
    }

    fn split_plain(text: &str) -> Vec<&str> {
        sentences_with(text, &SentenceOptions::none())
            .map(|s| s.as_str().expect("valid utf8"))
            .collect()
    }

    #[test]
    fn simple() {
        assert_eq!(vec!["He left. ", "She stayed."], split("He left. She stayed."));
        assert_eq!(vec!["Is it? ", "Yes!"], split("Is it? Yes!"));
        assert_eq!(vec!["No terminator"], split("No terminator"));
    }

    #[test]
    fn abbreviations() {
        assert_eq!(vec!["Mr. Smith"], split("Mr. Smith"));
        assert_eq!(vec!["Ask Dr. Who. ", "Now."], split("Ask Dr. Who. Now."));
        assert_eq!(vec!["See (Mr. Smith)"], split("See (Mr. Smith)"));
        assert_eq!(vec!["Mr. ", "Smith"], split_plain("Mr. Smith"));
        // Only whole tokens match
        assert_eq!(vec!["HMr. ", "Smith"], split("HMr. Smith"));
    }

    #[test]
    fn numbers_and_initials() {
        assert_eq!(vec!["Pi is 3.14 ok."], split("Pi is 3.14 ok."));
        assert_eq!(vec!["The U.S.A. is big."], split("The U.S.A. is big."));
    }

    #[test]
    fn lower_case_continues() {
        assert_eq!(vec!["He left. 42 apples."], split("He left. 42 apples."));
        assert_eq!(vec!["He left. ", "42 Apples."], split("He left. 42 Apples."));
        assert_eq!(vec!["etc. and more"], split_plain("etc. and more"));
    }

    #[test]
    fn closing_punctuation() {
        assert_eq!(
            vec!["He said \"Stop.\" ", "Then left."],
            split("He said \"Stop.\" Then left.")
        );
        assert_eq!(vec!["Wait!) ", "Go"], split("Wait!) Go"));
    }

    #[test]
    fn number_signs() {
        assert_eq!(vec!["Go!", "\u{0600} x"], split_plain("Go!\u{0600} x"));
        assert_eq!(vec!["Go.\u{0600}1"], split_plain("Go.\u{0600}1"));
    }

    #[test]
    fn paragraph_separators() {
        assert_eq!(vec!["Hello.\n", "World"], split("Hello.\nWorld"));
        assert_eq!(vec!["one\r\n", "two"], split("one\r\ntwo"));
        assert_eq!(vec!["a\u{2029}", "b"], split("a\u{2029}b"));
    }
}
