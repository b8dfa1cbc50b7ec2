use strum_macros::{AsRefStr, FromRepr};

// The discriminants of these enums are the values stored in the generated
// tables, keep them in sync with the table headers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, AsRefStr)]
#[repr(u8)]
pub enum GraphemeBreak {
    CR = 0,
    Control,
    Extend,
    L,
    LF,
    LV,
    LVT,
    Prepend,
    RegionalIndicator,
    SpacingMark,
    T,
    V,
    ZWJ,
    Any,
}

impl GraphemeBreak {
    /// Hangul jamo or precomposed syllable
    pub fn is_hangul(&self) -> bool {
        use GraphemeBreak::*;
        matches!(self, L | V | T | LV | LVT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, AsRefStr)]
#[repr(u8)]
pub enum WordBreak {
    ALetter = 0,
    CR,
    DoubleQuote,
    Extend,
    ExtendNumLet,
    Format,
    HebrewLetter,
    Katakana,
    LF,
    MidLetter,
    MidNum,
    MidNumLet,
    Newline,
    Numeric,
    RegionalIndicator,
    SingleQuote,
    WSegSpace,
    ZWJ,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, AsRefStr)]
#[repr(u8)]
pub enum SentenceBreak {
    ATerm = 0,
    CR,
    Close,
    Extend,
    Format,
    LF,
    Lower,
    Numeric,
    OLetter,
    SContinue,
    STerm,
    Sep,
    Sp,
    Upper,
    Any,
}

/// Line breaking classes of UAX #14
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, AsRefStr)]
#[repr(u8)]
pub enum LineBreak {
    /// Ambiguous (Alphabetic or Ideographic)
    AI = 0,
    /// Aksara
    AK,
    /// Alphabetic
    AL,
    /// Aksara Pre-Base
    AP,
    /// Aksara Start
    AS,
    /// Break Opportunity Before and After
    B2,
    /// Break After
    BA,
    /// Break Before
    BB,
    /// Mandatory Break
    BK,
    /// Contingent Break Opportunity
    CB,
    /// Conditional Japanese Starter
    CJ,
    /// Close Punctuation
    CL,
    /// Combining Mark
    CM,
    /// Close Parenthesis
    CP,
    /// Carriage Return
    CR,
    /// Emoji Base
    EB,
    /// Emoji Modifier
    EM,
    /// Exclamation/Interrogation
    EX,
    /// Non-breaking ("Glue")
    GL,
    /// Hangul LV Syllable
    H2,
    /// Hangul LVT Syllable
    H3,
    /// Hebrew Letter
    HL,
    /// Hyphen
    HY,
    /// Ideographic
    ID,
    /// Inseparable
    IN,
    /// Infix Numeric Separator
    IS,
    /// Hangul L Jamo
    JL,
    /// Hangul T Jamo
    JT,
    /// Hangul V Jamo
    JV,
    /// Line Feed
    LF,
    /// Next Line
    NL,
    /// Nonstarter
    NS,
    /// Numeric
    NU,
    /// Open Punctuation
    OP,
    /// Postfix Numeric
    PO,
    /// Prefix Numeric
    PR,
    /// Quotation
    QU,
    /// Regional Indicator
    RI,
    /// Complex Context Dependent (South East Asian)
    SA,
    /// Surrogate
    SG,
    /// Space
    SP,
    /// Symbols Allowing Break After
    SY,
    /// Virama Final
    VF,
    /// Virama
    VI,
    /// Word Joiner
    WJ,
    /// Zero Width Space
    ZW,
    /// Zero Width Joiner
    ZWJ,
    /// Unknown
    XX,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, AsRefStr)]
#[repr(u8)]
pub enum EastAsianWidth {
    Ambiguous = 0,
    Fullwidth,
    Halfwidth,
    Neutral,
    Narrow,
    Wide,
}

impl EastAsianWidth {
    /// Fullwidth, Wide or Halfwidth, the characters UAX #14 LB30 calls East
    /// Asian
    pub fn is_east_asian(&self) -> bool {
        use EastAsianWidth::*;
        matches!(self, Fullwidth | Wide | Halfwidth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, AsRefStr)]
#[repr(u8)]
pub enum GeneralCategory {
    Control = 0,
    Format,
    Unassigned,
    PrivateUse,
    Surrogate,
    LowercaseLetter,
    ModifierLetter,
    OtherLetter,
    TitlecaseLetter,
    UppercaseLetter,
    SpacingMark,
    EnclosingMark,
    NonspacingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectorPunctuation,
    DashPunctuation,
    ClosePunctuation,
    FinalPunctuation,
    InitialPunctuation,
    OtherPunctuation,
    OpenPunctuation,
    CurrencySymbol,
    ModifierSymbol,
    MathSymbol,
    OtherSymbol,
    LineSeparator,
    ParagraphSeparator,
    SpaceSeparator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, AsRefStr)]
#[repr(u8)]
pub enum IndicConjunctBreak {
    Consonant = 0,
    Extend,
    Linker,
    None,
}
