use strum_macros::AsRefStr;
use termseg_ucd::{
    east_asian_width, general_category, line_break, GeneralCategory, LineBreak, Property,
};

use crate::{
    chars::Chars,
    segment::{Breaker, Segment, Split},
};

/// Classification of a position between two code points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum BreakOpportunity {
    /// The line must break here
    Mandatory,
    /// The line may break here
    Allowed,
    /// The line must not break here
    Prohibited,
}

impl BreakOpportunity {
    pub fn is_break(&self) -> bool {
        matches!(self, BreakOpportunity::Mandatory | BreakOpportunity::Allowed)
    }
}

/// Iterate over the parts of `text` between line break opportunities. Each
/// segment is returned with the opportunity at its end.
pub fn line_segments<T: AsRef<[u8]> + ?Sized>(text: &T) -> LineSegments<'_> {
    LineSegments {
        split: Split::new(text.as_ref(), LineBreaker::new()),
    }
}

#[derive(Debug, Clone)]
pub struct LineSegments<'a> {
    split: Split<'a, LineBreaker>,
}

impl<'a> Iterator for LineSegments<'a> {
    type Item = (Segment<'a>, BreakOpportunity);

    fn next(&mut self) -> Option<(Segment<'a>, BreakOpportunity)> {
        self.split.next_segment()
    }
}

impl<'a> std::iter::FusedIterator for LineSegments<'a> {}

/// Iterate over every code point boundary of `text` after the first code
/// point, returning the byte position and its classification. The end of
/// text is always a mandatory break.
pub fn line_breaks<T: AsRef<[u8]> + ?Sized>(text: &T) -> LineBreaks<'_> {
    LineBreaks {
        chars: Chars::new(text.as_ref()),
        breaker: LineBreaker::new(),
        started: false,
        done: false,
    }
}

#[derive(Debug, Clone)]
pub struct LineBreaks<'a> {
    chars: Chars<'a>,
    breaker: LineBreaker,
    started: bool,
    done: bool,
}

impl<'a> Iterator for LineBreaks<'a> {
    type Item = (usize, BreakOpportunity);

    fn next(&mut self) -> Option<(usize, BreakOpportunity)> {
        while let Some((start, _, ch)) = self.chars.next() {
            let opportunity = self.breaker.feed(ch, &self.chars);
            if self.started {
                return Some((start, opportunity));
            }
            self.started = true;
        }

        if self.done || !self.started {
            return None;
        }

        // LB3
        self.done = true;
        Some((self.chars.as_bytes().len(), BreakOpportunity::Mandatory))
    }
}

impl<'a> std::iter::FusedIterator for LineBreaks<'a> {}

const DOTTED_CIRCLE: char = '\u{25CC}';

/// LB1, resolve classes whose behaviour depends on context we do not have
fn resolve(ch: char, class: LineBreak) -> LineBreak {
    use LineBreak::*;

    match class {
        AI | SG | XX => AL,
        SA => match general_category(ch) {
            GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark => CM,
            _ => AL,
        },
        CJ => NS,
        class => class,
    }
}

/// Progress through the LB25 number pattern
/// (PR|PO)? (OP|HY)? NU (NU|SY|IS)* (CL|CP)? (PR|PO)?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    None,
    /// After NU (NU|SY|IS)*
    Digits,
    /// After NU (NU|SY|IS)* (CL|CP)
    Closed,
}

/// Line break opportunity state machine.
///
/// Combining marks attached by LB9 do not change the state so the classes
/// kept here are always of base characters.
#[derive(Debug, Clone)]
pub struct LineBreaker {
    /// Resolved class of the previous code point, `None` at start of text
    prev: Option<LineBreak>,
    /// Class of the previous base character after LB9 and LB10
    before: LineBreak,
    /// Like `before` but spaces are skipped
    before_space: LineBreak,
    /// Previous base has East Asian width F, W or H
    before_east_asian: bool,
    /// Previous base is an unassigned extended pictographic code point
    before_unassigned_pictographic: bool,
    /// HL (HY | BA) precedes the position
    hebrew_hyphen: bool,
    /// Previous base is AK, AS or a dotted circle
    before_aksara: bool,
    /// (AK | AS | dotted circle) VI precedes the position
    aksara_virama: bool,
    number: NumberState,
    ri_count: usize,
}

impl LineBreaker {
    pub fn new() -> LineBreaker {
        LineBreaker {
            prev: None,
            // Resolution never produces XX
            before: LineBreak::XX,
            before_space: LineBreak::XX,
            before_east_asian: false,
            before_unassigned_pictographic: false,
            hebrew_hyphen: false,
            before_aksara: false,
            aksara_virama: false,
            number: NumberState::None,
            ri_count: 0,
        }
    }

    /// Feed the next code point, returns the break opportunity before it.
    /// `rest` is the text after `ch`.
    pub fn feed(&mut self, ch: char, rest: &Chars<'_>) -> BreakOpportunity {
        use LineBreak::*;

        let class = resolve(ch, line_break(ch));
        let opportunity = match self.prev {
            Some(prev) => self.opportunity(prev, class, ch, rest),
            // LB2
            None => BreakOpportunity::Prohibited,
        };

        // LB9
        let attached = self.prev.is_some()
            && matches!(class, CM | ZWJ)
            && !matches!(self.before, BK | CR | LF | NL | SP | ZW);
        if !attached {
            // LB10
            let base = if matches!(class, CM | ZWJ) { AL } else { class };
            self.advance(ch, base);
        }

        self.prev = Some(class);
        opportunity
    }

    fn advance(&mut self, ch: char, class: LineBreak) {
        use LineBreak::*;

        self.hebrew_hyphen = matches!(class, HY | BA) && self.before == HL;
        self.aksara_virama = class == VI && self.before_aksara;
        self.before_aksara = is_aksara(ch, class);
        self.ri_count = if class == RI { self.ri_count + 1 } else { 0 };
        self.number = match (self.number, class) {
            (_, NU) => NumberState::Digits,
            (NumberState::Digits, SY | IS) => NumberState::Digits,
            (NumberState::Digits, CL | CP) => NumberState::Closed,
            _ => NumberState::None,
        };

        if class != SP {
            self.before_space = class;
        }
        self.before = class;
        self.before_east_asian = east_asian_width(ch).is_east_asian();
        self.before_unassigned_pictographic = Property::ExtendedPictographic.check(ch)
            && general_category(ch) == GeneralCategory::Unassigned;
    }

    // https://www.unicode.org/reports/tr14/#Algorithm
    fn opportunity(
        &self,
        prev: LineBreak,
        class: LineBreak,
        ch: char,
        rest: &Chars<'_>,
    ) -> BreakOpportunity {
        use BreakOpportunity::*;
        use LineBreak::*;

        match (prev, class) {
            (BK, _) => return Mandatory,           // LB 4
            (CR, LF) => return Prohibited,         // LB 5
            (CR | LF | NL, _) => return Mandatory, // LB 5
            (_, BK | CR | LF | NL) => return Prohibited, // LB 6
            (_, SP | ZW) => return Prohibited,     // LB 7
            _ => {}
        }

        // LB 8
        if self.before_space == ZW {
            return Allowed;
        }

        // LB 8a
        if prev == ZWJ {
            return Prohibited;
        }

        if matches!(class, CM | ZWJ) {
            if !matches!(self.before, BK | CR | LF | NL | SP | ZW) {
                // LB 9
                return Prohibited;
            }

            // LB 10
            return self.pair(self.before, AL, ch, rest);
        }

        self.pair(self.before, class, ch, rest)
    }

    /// Rules from LB11 onwards between two base characters
    fn pair(
        &self,
        before: LineBreak,
        after: LineBreak,
        ch: char,
        rest: &Chars<'_>,
    ) -> BreakOpportunity {
        use BreakOpportunity::*;
        use LineBreak::*;

        let after_aksara = is_aksara(ch, after);
        match (before, after) {
            (WJ, _) | (_, WJ) => Prohibited,                            // LB 11
            (GL, _) => Prohibited,                                      // LB 12
            (b, GL) if !matches!(b, SP | BA | HY) => Prohibited,        // LB 12a
            (_, CL | CP | EX | IS | SY) => Prohibited,                  // LB 13
            _ if self.before_space == OP => Prohibited,                 // LB 14
            (_, OP) if self.before_space == QU => Prohibited,           // LB 15
            (_, NS) if matches!(self.before_space, CL | CP) => Prohibited, // LB 16
            (_, B2) if self.before_space == B2 => Prohibited,           // LB 17
            (SP, _) => Allowed,                                         // LB 18
            (QU, _) | (_, QU) => Prohibited,                            // LB 19
            (CB, _) | (_, CB) => Allowed,                               // LB 20
            (_, BA | HY | NS) | (BB, _) => Prohibited,                  // LB 21
            (HY | BA, _) if self.hebrew_hyphen => Prohibited,           // LB 21a
            (SY, HL) => Prohibited,                                     // LB 21b
            (_, IN) => Prohibited,                                      // LB 22
            (AL | HL, NU) | (NU, AL | HL) => Prohibited,                // LB 23
            (PR, ID | EB | EM) | (ID | EB | EM, PO) => Prohibited,      // LB 23a
            (PR | PO, AL | HL) | (AL | HL, PR | PO) => Prohibited,      // LB 24
            _ if self.in_number(before, after, rest) => Prohibited,     // LB 25
            (JL, JL | JV | H2 | H3) => Prohibited,                      // LB 26
            (JV | H2, JV | JT) => Prohibited,                           // LB 26
            (JT | H3, JT) => Prohibited,                                // LB 26
            (JL | JV | JT | H2 | H3, PO) => Prohibited,                 // LB 27
            (PR, JL | JV | JT | H2 | H3) => Prohibited,                 // LB 27
            (AL | HL, AL | HL) => Prohibited,                           // LB 28
            (AP, _) if after_aksara => Prohibited,                      // LB 28a
            (_, VF | VI) if self.before_aksara => Prohibited,           // LB 28a
            (VI, _) if self.aksara_virama && (after == AK || ch == DOTTED_CIRCLE) => Prohibited, // LB 28a
            _ if self.before_aksara && after_aksara && next_base(rest) == Some(VF) => Prohibited, // LB 28a
            (IS, AL | HL) => Prohibited,                                // LB 29
            (AL | HL | NU, OP) if !east_asian_width(ch).is_east_asian() => Prohibited, // LB 30
            (CP, AL | HL | NU) if !self.before_east_asian => Prohibited, // LB 30
            (RI, RI) if self.ri_count % 2 == 1 => Prohibited,           // LB 30a
            (EB, EM) => Prohibited,                                     // LB 30b
            (_, EM) if self.before_unassigned_pictographic => Prohibited, // LB 30b
            _ => Allowed,                                               // LB 31
        }
    }

    /// LB25 without breaking numbers like "$(1,234.50)" or "-5%"
    fn in_number(&self, before: LineBreak, after: LineBreak, rest: &Chars<'_>) -> bool {
        use LineBreak::*;

        match (before, after) {
            (PR | PO, NU) => true,
            (PR | PO, OP | HY) => next_base(rest) == Some(NU),
            (OP | HY, NU) => true,
            (_, NU | SY | IS | CL | CP) => self.number == NumberState::Digits,
            (_, PR | PO) => self.number != NumberState::None,
            _ => false,
        }
    }
}

/// Aksara of LB28a, the dotted circle stands in for a missing base
fn is_aksara(ch: char, class: LineBreak) -> bool {
    matches!(class, LineBreak::AK | LineBreak::AS) || ch == DOTTED_CIRCLE
}

/// Resolved class of the next code point that LB9 does not attach
fn next_base(rest: &Chars<'_>) -> Option<LineBreak> {
    rest.clone()
        .map(|(_, _, ch)| resolve(ch, line_break(ch)))
        .find(|class| !matches!(class, LineBreak::CM | LineBreak::ZWJ))
}

/// Whether `ch` always forces a line break after it
pub fn is_line_terminator(ch: char) -> bool {
    matches!(
        line_break(ch),
        LineBreak::BK | LineBreak::CR | LineBreak::LF | LineBreak::NL
    )
}

impl Default for LineBreaker {
    fn default() -> Self {
        LineBreaker::new()
    }
}

impl Breaker for LineBreaker {
    type Decision = BreakOpportunity;

    fn decide(&mut self, ch: char, rest: &Chars<'_>) -> BreakOpportunity {
        self.feed(ch, rest)
    }

    fn is_break(decision: BreakOpportunity) -> bool {
        decision.is_break()
    }

    fn end_of_text() -> BreakOpportunity {
        // LB 3
        BreakOpportunity::Mandatory
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use BreakOpportunity::*;

    fn split(text: &str) -> Vec<(&str, BreakOpportunity)> {
        line_segments(text)
            .map(|(s, op)| (s.as_str().expect("valid utf8"), op))
            .collect()
    }

    fn parts(text: &str) -> Vec<&str> {
        split(text).into_iter().map(|(s, _)| s).collect()
    }

    #[test]
    fn spaces() {
        assert_eq!(
            vec![("Hello ", Allowed), ("world", Mandatory)],
            split("Hello world")
        );
        assert_eq!(vec![" ", "a"], parts(" a"));
        assert_eq!(vec!["a\u{0301} ", "b"], parts("a\u{0301} b"));
    }

    #[test]
    fn mandatory() {
        assert_eq!(
            vec![("a\n", Mandatory), ("b", Mandatory)],
            split("a\nb")
        );
        assert_eq!(
            vec![("a\r\n", Mandatory), ("b", Mandatory)],
            split("a\r\nb")
        );
        assert_eq!(
            vec![("a\r", Mandatory), ("\r\n", Mandatory)],
            split("a\r\r\n")
        );
        assert_eq!(vec!["a\u{2028}", "b"], parts("a\u{2028}b"));
        assert_eq!(vec!["a\u{0085}", "b"], parts("a\u{0085}b"));
    }

    #[test]
    fn numbers() {
        assert_eq!(vec!["$(12.50)"], parts("$(12.50)"));
        assert_eq!(vec!["100% ", "sure"], parts("100% sure"));
        assert_eq!(vec!["$-5"], parts("$-5"));
        assert_eq!(vec!["1,000.5"], parts("1,000.5"));
        assert_eq!(vec!["-\u{0600}5"], parts("-\u{0600}5"));
    }

    #[test]
    fn punctuation() {
        assert_eq!(vec!["foo-", "bar"], parts("foo-bar"));
        assert_eq!(vec!["a ", "(b)"], parts("a (b)"));
        assert_eq!(vec!["\"a\""], parts("\"a\""));
        assert_eq!(vec!["a(b"], parts("a(b"));
        assert_eq!(vec!["a", "（b"], parts("a（b"));
        assert_eq!(vec!["end. ", "Next"], parts("end. Next"));
        assert_eq!(vec!["א-ב"], parts("א-ב"));
    }

    #[test]
    fn ideographs() {
        assert_eq!(vec!["日", "本", "語"], parts("日本語"));
        assert_eq!(vec!["日", "本。"], parts("日本。"));
    }

    #[test]
    fn glue_and_joiners() {
        assert_eq!(vec!["a\u{00A0}b"], parts("a\u{00A0}b"));
        assert_eq!(vec!["a\u{2060}b"], parts("a\u{2060}b"));
        assert_eq!(vec!["a\u{200B}", "b"], parts("a\u{200B}b"));
        assert_eq!(vec!["a\u{200B} ", "b"], parts("a\u{200B} b"));
    }

    #[test]
    fn emoji() {
        assert_eq!(vec!["🇩🇪", "🇫🇮"], parts("🇩🇪🇫🇮"));
        assert_eq!(vec!["👍🏻", "👍"], parts("👍🏻👍"));
        assert_eq!(vec!["👨‍👩"], parts("👨‍👩"));
    }

    #[test]
    fn brahmic_syllables() {
        // Balinese ka, adeg adeg, ka
        assert_eq!(vec!["\u{1B13}\u{1B44}\u{1B13}"], parts("\u{1B13}\u{1B44}\u{1B13}"));
        assert_eq!(vec!["\u{1B13}", "\u{1B13}"], parts("\u{1B13}\u{1B13}"));
        // Batak a, ka, ka, pangolat
        assert_eq!(vec!["\u{1BC0}\u{1BC1}\u{1BF2}"], parts("\u{1BC0}\u{1BC1}\u{1BF2}"));
        assert_eq!(
            vec!["\u{1BC0}", "\u{1BC1}\u{1BC1}\u{1BF2}"],
            parts("\u{1BC0}\u{1BC1}\u{1BC1}\u{1BF2}")
        );
        assert_eq!(vec!["\u{11003}\u{11013}"], parts("\u{11003}\u{11013}"));
        assert_eq!(vec!["\u{25CC}\u{1B44}\u{1B13}"], parts("\u{25CC}\u{1B44}\u{1B13}"));
    }

    #[test]
    fn resolution() {
        assert_eq!(LineBreak::AL, resolve('a', LineBreak::XX));
        assert_eq!(LineBreak::CM, resolve('\u{0E34}', line_break('\u{0E34}')));
        assert_eq!(LineBreak::AL, resolve('ก', line_break('ก')));
        assert_eq!(LineBreak::NS, resolve('ぁ', line_break('ぁ')));
        assert_eq!(vec!["กิน"], parts("กิน"));
    }

    #[test]
    fn malformed_input() {
        use crate::chars::REPLACEMENT_CHAR;

        assert_eq!(LineBreak::AI, line_break(REPLACEMENT_CHAR));
        assert_eq!(LineBreak::AL, resolve(REPLACEMENT_CHAR, LineBreak::AI));
        let breaks: Vec<(usize, BreakOpportunity)> = line_breaks(b"a\xFFb c").collect();
        assert_eq!(
            vec![(1, Prohibited), (2, Prohibited), (3, Prohibited), (4, Allowed), (5, Mandatory)],
            breaks
        );
    }

    #[test]
    fn every_position() {
        let breaks: Vec<(usize, BreakOpportunity)> = line_breaks("ab c").collect();
        assert_eq!(
            vec![(1, Prohibited), (2, Prohibited), (3, Allowed), (4, Mandatory)],
            breaks
        );
        assert!(line_breaks("").next().is_none());
        assert_eq!(vec![(1, Mandatory)], line_breaks("x").collect::<Vec<_>>());
    }
}
