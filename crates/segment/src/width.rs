use serde::Deserialize;
use termseg_ucd::{east_asian_width, grapheme_break, EastAsianWidth, GraphemeBreak, Property};

use crate::chars::REPLACEMENT_CHAR;

const VARIATION_SELECTOR_15: char = '\u{FE0E}';
const VARIATION_SELECTOR_16: char = '\u{FE0F}';
const TWO_EM_DASH: char = '\u{2E3A}';
const THREE_EM_DASH: char = '\u{2E3B}';

/// How wide East Asian Ambiguous characters are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguousWidth {
    #[default]
    Narrow,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(default)]
pub struct WidthOptions {
    pub ambiguous: AmbiguousWidth,
}

impl WidthOptions {
    pub fn wide() -> WidthOptions {
        WidthOptions {
            ambiguous: AmbiguousWidth::Wide,
        }
    }
}

/// Width of a single code point, without the context of its grapheme
/// cluster.
///
/// U+FFFD is East Asian Ambiguous but is always 1 wide, malformed input is
/// decoded to it and must not change width with the ambiguous option.
pub fn char_width(ch: char, options: &WidthOptions) -> usize {
    use GraphemeBreak::*;

    match ch {
        TWO_EM_DASH => return 3,
        THREE_EM_DASH => return 4,
        REPLACEMENT_CHAR => return 1,
        _ => {}
    }

    match grapheme_break(ch) {
        Control | CR | LF | Extend | ZWJ => return 0,
        RegionalIndicator => return 2,
        _ => {}
    }

    if Property::ExtendedPictographic.check(ch) {
        return if Property::EmojiPresentation.check(ch) {
            2
        } else {
            1
        };
    }

    match east_asian_width(ch) {
        EastAsianWidth::Wide | EastAsianWidth::Fullwidth => 2,
        EastAsianWidth::Ambiguous => match options.ambiguous {
            AmbiguousWidth::Narrow => 1,
            AmbiguousWidth::Wide => 2,
        },
        _ => 1,
    }
}

/// Width of one grapheme cluster given its code points in order.
///
/// The per code point widths are summed, then the cluster overrides are
/// applied in order, a later override replacing the result of an earlier
/// one:
/// 1. Hangul and regional indicator clusters only count their first code
///    point
/// 2. Pictographic clusters with more than one code point are 2 wide, or 1
///    wide if they contain VS15
/// 3. Clusters of more than one code point ending in VS16 are 2 wide
pub fn cluster_width<I: IntoIterator<Item = char>>(chars: I, options: &WidthOptions) -> usize {
    let mut chars = chars.into_iter();
    let first = match chars.next() {
        Some(ch) => ch,
        None => return 0,
    };

    let first_width = char_width(first, options);
    let gbreak = grapheme_break(first);
    let first_only = gbreak.is_hangul() || gbreak == GraphemeBreak::RegionalIndicator;

    let mut width = first_width;
    let mut count = 1;
    let mut last = first;
    let mut text_presentation = false;

    for ch in chars {
        count += 1;
        last = ch;
        text_presentation |= ch == VARIATION_SELECTOR_15;

        if !first_only {
            width += char_width(ch, options);
        }
    }

    if count > 1 && Property::ExtendedPictographic.check(first) {
        width = if text_presentation { 1 } else { 2 };
    }

    if count > 1 && last == VARIATION_SELECTOR_16 {
        width = 2;
    }

    width
}

#[cfg(test)]
mod test {
    use super::*;

    fn width(text: &str) -> usize {
        cluster_width(text.chars(), &WidthOptions::default())
    }

    #[test]
    fn single_chars() {
        let opts = WidthOptions::default();
        assert_eq!(1, char_width('a', &opts));
        assert_eq!(0, char_width('\t', &opts));
        assert_eq!(0, char_width('\u{0301}', &opts));
        assert_eq!(0, char_width('\u{200D}', &opts));
        assert_eq!(2, char_width('간', &opts));
        assert_eq!(2, char_width('Ａ', &opts));
        assert_eq!(1, char_width('ｱ', &opts));
        assert_eq!(2, char_width('🥳', &opts));
        assert_eq!(1, char_width('❤', &opts));
        assert_eq!(2, char_width('🇫', &opts));
        assert_eq!(3, char_width(TWO_EM_DASH, &opts));
        assert_eq!(4, char_width(THREE_EM_DASH, &opts));
    }

    #[test]
    fn ambiguous() {
        assert_eq!(1, char_width('±', &WidthOptions::default()));
        assert_eq!(2, char_width('±', &WidthOptions::wide()));
        assert_eq!(1, char_width('a', &WidthOptions::wide()));
    }

    #[test]
    fn clusters() {
        assert_eq!(0, width(""));
        assert_eq!(1, width("e\u{0301}"));
        assert_eq!(2, width("🏳️‍🌈"));
        assert_eq!(2, width("❤️"));
        assert_eq!(1, width("❤\u{FE0E}"));
        assert_eq!(1, width("🥳\u{FE0E}"));
        assert_eq!(2, width("👨‍👩‍👧"));
        assert_eq!(2, width("🇩🇪"));
        assert_eq!(2, width("\u{1100}\u{1161}\u{11A8}"));
        assert_eq!(1, width("#\u{20E3}"));
        assert_eq!(3, width("\u{2E3A}"));
    }

    #[test]
    fn trailing_vs16() {
        assert_eq!(2, width("a\u{FE0F}"));
        assert_eq!(0, width("\u{FE0F}"));
    }

    #[test]
    fn both_variation_selectors() {
        // VS15 makes the pictograph narrow, the trailing VS16 overrides it
        assert_eq!(2, width("❤\u{FE0E}\u{FE0F}"));
        assert_eq!(1, width("❤\u{FE0F}\u{FE0E}"));
        assert_eq!(2, width("🇩🇪\u{FE0F}"));
    }

    #[test]
    fn replacement_char() {
        assert_eq!(1, char_width(REPLACEMENT_CHAR, &WidthOptions::default()));
        assert_eq!(1, char_width(REPLACEMENT_CHAR, &WidthOptions::wide()));
        assert_eq!(2, char_width('±', &WidthOptions::wide()));
    }
}
