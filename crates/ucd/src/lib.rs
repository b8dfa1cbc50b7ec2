//! Unicode character properties needed for text segmentation and display
//! width calculation.
//!
//! Every property is a sorted table of non-overlapping code point ranges
//! searched with a binary search. Code points not present in a table get the
//! default value of the property.

use std::cmp::Ordering;

mod east_asian_width;
mod emoji;
mod enums;
mod general_category;
mod grapheme_break;
mod indic_conjunct_break;
mod line_break;
mod sentence_break;
mod word_break;

pub use enums::{
    EastAsianWidth, GeneralCategory, GraphemeBreak, IndicConjunctBreak, LineBreak, SentenceBreak,
    WordBreak,
};

/// Unicode version of the segmentation rules and of every table
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 1, 0);

pub fn grapheme_break(ch: char) -> GraphemeBreak {
    search_table(ch, grapheme_break::GRAPHEME_CLUSTER_BREAK)
        .and_then(GraphemeBreak::from_repr)
        .unwrap_or(GraphemeBreak::Any)
}

pub fn word_break(ch: char) -> WordBreak {
    search_table(ch, word_break::WORD_BREAK)
        .and_then(WordBreak::from_repr)
        .unwrap_or(WordBreak::Any)
}

pub fn sentence_break(ch: char) -> SentenceBreak {
    search_table(ch, sentence_break::SENTENCE_BREAK)
        .and_then(SentenceBreak::from_repr)
        .unwrap_or(SentenceBreak::Any)
}

/// Unresolved line break class, classes like AI or SA are returned as is
pub fn line_break(ch: char) -> LineBreak {
    search_table(ch, line_break::LINE_BREAK)
        .and_then(LineBreak::from_repr)
        .unwrap_or(LineBreak::XX)
}

pub fn east_asian_width(ch: char) -> EastAsianWidth {
    search_table(ch, east_asian_width::EAST_ASIAN_WIDTH)
        .and_then(EastAsianWidth::from_repr)
        .unwrap_or(EastAsianWidth::Neutral)
}

pub fn general_category(ch: char) -> GeneralCategory {
    search_table(ch, general_category::GENERAL_CATEGORY)
        .and_then(GeneralCategory::from_repr)
        .unwrap_or(GeneralCategory::Unassigned)
}

pub fn indic_conjunct_break(ch: char) -> IndicConjunctBreak {
    search_table(ch, indic_conjunct_break::INDIC_CONJUNCT_BREAK)
        .and_then(IndicConjunctBreak::from_repr)
        .unwrap_or(IndicConjunctBreak::None)
}

/// Binary properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    ExtendedPictographic,
    EmojiPresentation,
    EmojiModifier,
    EmojiModifierBase,
}

impl Property {
    pub fn check(&self, ch: char) -> bool {
        let table = match self {
            Property::ExtendedPictographic => emoji::EXTENDED_PICTOGRAPHIC,
            Property::EmojiPresentation => emoji::EMOJI_PRESENTATION,
            Property::EmojiModifier => emoji::EMOJI_MODIFIER,
            Property::EmojiModifierBase => emoji::EMOJI_MODIFIER_BASE,
        };
        search_ranges(ch, table).is_some()
    }
}

fn compare(ch: u32, start: u32, end: u32) -> Ordering {
    if ch < start {
        Ordering::Greater
    } else if end < ch {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

fn search_table(ch: char, table: &'static [(u32, u32, u8)]) -> Option<u8> {
    let ch = ch as u32;
    let pos = table
        .binary_search_by(|(start, end, _)| compare(ch, *start, *end))
        .ok()?;
    let (_, _, enum_pos) = &table[pos];
    Some(*enum_pos)
}

fn search_ranges(ch: char, table: &'static [(u32, u32)]) -> Option<usize> {
    let ch = ch as u32;
    table
        .binary_search_by(|(start, end)| compare(ch, *start, *end))
        .ok()
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_valid<T>(name: &str, table: &[(u32, u32, u8)], from_repr: fn(u8) -> Option<T>) {
        let mut prev_end = None;
        for (start, end, val) in table {
            assert!(start <= end, "{name}: inverted range {start:x}..{end:x}");
            assert!(*end <= 0x10FFFF, "{name}: {end:x} is not a code point");
            if let Some(prev) = prev_end {
                assert!(prev < *start, "{name}: {start:x} overlaps or is unsorted");
            }
            assert!(from_repr(*val).is_some(), "{name}: invalid value {val}");
            prev_end = Some(*end);
        }
    }

    fn assert_valid_ranges(name: &str, table: &[(u32, u32)]) {
        let with_value: Vec<(u32, u32, u8)> = table.iter().map(|(s, e)| (*s, *e, 0)).collect();
        assert_valid(name, &with_value, Some);
    }

    #[test]
    fn tables_sorted_and_disjoint() {
        assert_valid(
            "grapheme",
            grapheme_break::GRAPHEME_CLUSTER_BREAK,
            GraphemeBreak::from_repr,
        );
        assert_valid("word", word_break::WORD_BREAK, WordBreak::from_repr);
        assert_valid(
            "sentence",
            sentence_break::SENTENCE_BREAK,
            SentenceBreak::from_repr,
        );
        assert_valid("line", line_break::LINE_BREAK, LineBreak::from_repr);
        assert_valid(
            "eaw",
            east_asian_width::EAST_ASIAN_WIDTH,
            EastAsianWidth::from_repr,
        );
        assert_valid(
            "gc",
            general_category::GENERAL_CATEGORY,
            GeneralCategory::from_repr,
        );
        assert_valid(
            "incb",
            indic_conjunct_break::INDIC_CONJUNCT_BREAK,
            IndicConjunctBreak::from_repr,
        );
        assert_valid_ranges("extpict", emoji::EXTENDED_PICTOGRAPHIC);
        assert_valid_ranges("emoji presentation", emoji::EMOJI_PRESENTATION);
        assert_valid_ranges("emoji modifier", emoji::EMOJI_MODIFIER);
        assert_valid_ranges("emoji modifier base", emoji::EMOJI_MODIFIER_BASE);
    }

    #[test]
    fn ascii() {
        assert_eq!(GraphemeBreak::Any, grapheme_break('a'));
        assert_eq!(GraphemeBreak::CR, grapheme_break('\r'));
        assert_eq!(GraphemeBreak::LF, grapheme_break('\n'));
        assert_eq!(GraphemeBreak::Control, grapheme_break('\t'));
        assert_eq!(WordBreak::ALetter, word_break('a'));
        assert_eq!(WordBreak::Numeric, word_break('7'));
        assert_eq!(WordBreak::MidNumLet, word_break('.'));
        assert_eq!(WordBreak::WSegSpace, word_break(' '));
        assert_eq!(SentenceBreak::Upper, sentence_break('A'));
        assert_eq!(SentenceBreak::Lower, sentence_break('a'));
        assert_eq!(SentenceBreak::ATerm, sentence_break('.'));
        assert_eq!(SentenceBreak::STerm, sentence_break('!'));
        assert_eq!(SentenceBreak::Close, sentence_break(')'));
        assert_eq!(LineBreak::AL, line_break('a'));
        assert_eq!(LineBreak::SP, line_break(' '));
        assert_eq!(LineBreak::LF, line_break('\n'));
        assert_eq!(LineBreak::NU, line_break('1'));
        assert_eq!(LineBreak::OP, line_break('('));
        assert_eq!(EastAsianWidth::Narrow, east_asian_width('a'));
        assert_eq!(GeneralCategory::LowercaseLetter, general_category('a'));
        assert_eq!(GeneralCategory::Control, general_category('\0'));
    }

    #[test]
    fn hangul() {
        assert_eq!(GraphemeBreak::L, grapheme_break('\u{1100}'));
        assert_eq!(GraphemeBreak::V, grapheme_break('\u{1161}'));
        assert_eq!(GraphemeBreak::T, grapheme_break('\u{11A8}'));
        assert_eq!(GraphemeBreak::LV, grapheme_break('가'));
        assert_eq!(GraphemeBreak::LVT, grapheme_break('간'));
        assert_eq!(LineBreak::H2, line_break('가'));
        assert_eq!(LineBreak::H3, line_break('간'));
        assert_eq!(EastAsianWidth::Wide, east_asian_width('간'));
    }

    #[test]
    fn emoji() {
        assert!(Property::ExtendedPictographic.check('❤'));
        assert!(Property::ExtendedPictographic.check('😮'));
        assert!(!Property::ExtendedPictographic.check('a'));
        assert!(!Property::EmojiPresentation.check('❤'));
        assert!(Property::EmojiPresentation.check('🥳'));
        assert!(Property::EmojiModifier.check('\u{1F3FB}'));
        assert!(Property::EmojiModifierBase.check('\u{1F44D}'));
        assert_eq!(GraphemeBreak::RegionalIndicator, grapheme_break('🇫'));
        assert_eq!(GraphemeBreak::ZWJ, grapheme_break('\u{200D}'));
        assert_eq!(GraphemeBreak::Extend, grapheme_break('\u{FE0F}'));
        assert_eq!(LineBreak::EM, line_break('\u{1F3FB}'));
    }

    #[test]
    fn emoji_15() {
        // Shaking face, new in Emoji 15.0
        assert!(Property::ExtendedPictographic.check('\u{1FAE8}'));
        assert!(Property::EmojiPresentation.check('\u{1FAE8}'));
        assert_eq!(EastAsianWidth::Wide, east_asian_width('\u{1FAE8}'));
    }

    #[test]
    fn prepended_concatenation_marks() {
        let marks = [
            '\u{0600}', '\u{0605}', '\u{06DD}', '\u{0890}', '\u{0891}', '\u{08E2}', '\u{110BD}',
            '\u{110CD}',
        ];
        for ch in marks {
            assert_eq!(GraphemeBreak::Prepend, grapheme_break(ch), "{ch:?}");
            assert_eq!(WordBreak::Numeric, word_break(ch), "{ch:?}");
            assert_eq!(SentenceBreak::Numeric, sentence_break(ch), "{ch:?}");
            assert_eq!(LineBreak::NU, line_break(ch), "{ch:?}");
            assert_eq!(GeneralCategory::Format, general_category(ch), "{ch:?}");
        }

        // Syriac abbreviation mark
        assert_eq!(WordBreak::ALetter, word_break('\u{070F}'));
        assert_eq!(SentenceBreak::Format, sentence_break('\u{070F}'));
        assert_eq!(LineBreak::AL, line_break('\u{070F}'));
    }

    #[test]
    fn same_version_everywhere() {
        // Kannada sign combining anusvara above right, new in 15.0
        assert_eq!(GraphemeBreak::SpacingMark, grapheme_break('\u{0CF3}'));
        assert_eq!(GeneralCategory::SpacingMark, general_category('\u{0CF3}'));
        assert_eq!(LineBreak::CM, line_break('\u{0CF3}'));
        assert_eq!(SentenceBreak::Extend, sentence_break('\u{0CF3}'));

        // Kawi
        assert_eq!(GeneralCategory::NonspacingMark, general_category('\u{11F00}'));
        assert_eq!(LineBreak::AK, line_break('\u{11F04}'));
        assert_eq!(LineBreak::VI, line_break('\u{11F42}'));
        assert_eq!(SentenceBreak::OLetter, sentence_break('\u{11F04}'));

        // Nag Mundari
        assert_eq!(WordBreak::ALetter, word_break('\u{1E4D0}'));
        assert_eq!(LineBreak::AL, line_break('\u{1E4D0}'));

        // CJK extension H and the ideographic description characters of 15.1
        assert_eq!(LineBreak::ID, line_break('\u{31350}'));
        assert_eq!(EastAsianWidth::Wide, east_asian_width('\u{31350}'));
        assert_eq!(SentenceBreak::OLetter, sentence_break('\u{31350}'));
        assert_eq!(GeneralCategory::OtherSymbol, general_category('\u{2FFC}'));
        assert_eq!(EastAsianWidth::Wide, east_asian_width('\u{2FFC}'));
    }

    #[test]
    fn aksara() {
        assert_eq!(LineBreak::AK, line_break('\u{1B05}'));
        assert_eq!(LineBreak::VI, line_break('\u{1B44}'));
        assert_eq!(LineBreak::VF, line_break('\u{1BF2}'));
        assert_eq!(LineBreak::AP, line_break('\u{11003}'));
        assert_eq!(LineBreak::AL, line_break('\u{25CC}'));
    }

    #[test]
    fn indic_conjunct() {
        assert_eq!(IndicConjunctBreak::Consonant, indic_conjunct_break('क'));
        assert_eq!(IndicConjunctBreak::Linker, indic_conjunct_break('\u{094D}'));
        assert_eq!(IndicConjunctBreak::Extend, indic_conjunct_break('\u{0300}'));
        assert_eq!(IndicConjunctBreak::Extend, indic_conjunct_break('\u{200D}'));
        assert_eq!(IndicConjunctBreak::None, indic_conjunct_break('\u{200C}'));
        assert_eq!(IndicConjunctBreak::None, indic_conjunct_break('a'));
    }

    #[test]
    fn defaults() {
        let unassigned = '\u{E0FFF}';
        assert_eq!(LineBreak::XX, line_break('\u{50000}'));
        assert_eq!(GeneralCategory::Unassigned, general_category('\u{50000}'));
        assert_eq!(EastAsianWidth::Neutral, east_asian_width('\u{10FFFF}'));
        assert_eq!(SentenceBreak::Any, sentence_break('\u{10FFFF}'));
        assert_eq!(WordBreak::Any, word_break(unassigned));
    }

    #[test]
    fn special_dashes() {
        assert_eq!(LineBreak::B2, line_break('\u{2E3A}'));
        assert_eq!(LineBreak::B2, line_break('\u{2E3B}'));
    }
}
