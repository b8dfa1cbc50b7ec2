pub const REPLACEMENT_CHAR: char = '\u{FFFD}';
const ACCEPT: u32 = 0;
const REJECT: u32 = 12;

// Byte to character class, classes keep the transition table small and
// double as the mask for the payload bits of a leading byte.
#[rustfmt::skip]
const CHAR_CLASSES: [u8; 256] = [
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,  9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,
     7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,  7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,
     8,8,2,2,2,2,2,2,2,2,2,2,2,2,2,2,  2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,
    10,3,3,3,3,3,3,3,3,3,3,3,3,4,3,3, 11,6,6,6,5,8,8,8,8,8,8,8,8,8,8,8,
];

// (state + class) to next state
#[rustfmt::skip]
const TRANSITIONS: [u8; 108] = [
    0, 12,24,36,60,96,84,12,12,12,48,72, 12,12,12,12,12,12,12,12,12,12,12,12,
    12, 0,12,12,12,12,12, 0,12, 0,12,12, 12,24,12,12,12,12,12,24,12,24,12,12,
    12,12,12,12,12,12,12,24,12,12,12,12, 12,24,12,12,12,12,12,12,12,24,12,12,
    12,12,12,12,12,12,12,36,12,36,12,12, 12,36,12,12,12,12,12,36,12,36,12,12,
    12,36,12,12,12,12,12,12,12,12,12,12,
];

/// Outcome of feeding one byte to the decoder
enum Decoded {
    Char(char),
    Invalid,
    Pending,
}

/// Bjoern Hoehrmann's utf8 automaton,
/// https://bjoern.hoehrmann.de/utf-8/decoder/dfa/
#[derive(Debug, Clone, Copy)]
struct Decoder {
    state: u32,
    cp: u32,
}

impl Decoder {
    const fn new() -> Decoder {
        Decoder {
            state: ACCEPT,
            cp: 0,
        }
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Decoded {
        if self.state == ACCEPT && byte.is_ascii() {
            return Decoded::Char(byte as char);
        }

        let class = CHAR_CLASSES[byte as usize] as u32;
        let byte = byte as u32;
        self.cp = if self.state == ACCEPT {
            (0xff >> class) & byte
        } else {
            (self.cp << 6) | (byte & 0x3f)
        };
        self.state = TRANSITIONS[(self.state + class) as usize] as u32;

        match self.state {
            // The automaton only accepts scalar values
            ACCEPT => char::from_u32(self.cp).map_or(Decoded::Invalid, Decoded::Char),
            REJECT => {
                *self = Decoder::new();
                Decoded::Invalid
            }
            _ => Decoded::Pending,
        }
    }
}

/// Decodes code points from possibly invalid utf8.
///
/// Yields `(start, end, char)` where start and end are byte offsets. Invalid
/// sequences are replaced with a single [`REPLACEMENT_CHAR`] each so that
/// iteration always makes progress.
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    bytes: &'a [u8],
    pos: usize,
    decoder: Decoder,
}

impl<'a> Chars<'a> {
    pub fn new(bytes: &'a [u8]) -> Chars<'a> {
        Chars {
            bytes,
            pos: 0,
            decoder: Decoder::new(),
        }
    }

    /// Byte position of the next char
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> Iterator for Chars<'a> {
    type Item = (usize, usize, char);

    fn next(&mut self) -> Option<(usize, usize, char)> {
        let start = self.pos;

        while let Some(&byte) = self.bytes.get(self.pos) {
            self.pos += 1;

            match self.decoder.push(byte) {
                Decoded::Char(ch) => return Some((start, self.pos, ch)),
                Decoded::Invalid => {
                    // The byte that broke a multi byte sequence may start the
                    // next char, only the prefix before it is replaced
                    if self.pos - start > 1 {
                        self.pos -= 1;
                    }
                    return Some((start, self.pos, REPLACEMENT_CHAR));
                }
                Decoded::Pending => {}
            }
        }

        // Truncated sequence at the end
        self.decoder = Decoder::new();
        (start != self.pos).then_some((start, self.pos, REPLACEMENT_CHAR))
    }
}

impl<'a> std::iter::FusedIterator for Chars<'a> {}

#[cfg(test)]
mod test {
    use super::*;

    fn decode(bytes: &[u8]) -> Vec<(usize, usize, char)> {
        Chars::new(bytes).collect()
    }

    #[test]
    fn invalid_sequences() {
        let expected = vec![
            (0, 1, 'a'),
            (1, 2, 'b'),
            (2, 3, REPLACEMENT_CHAR),
            // Valid prefix of a 4 byte sequence
            (3, 6, REPLACEMENT_CHAR),
            (6, 7, REPLACEMENT_CHAR),
            // Stray continuation bytes
            (7, 8, REPLACEMENT_CHAR),
            (8, 9, REPLACEMENT_CHAR),
            (9, 10, 'c'),
        ];
        assert_eq!(expected, decode(b"ab\xFF\xF0\x90\x8D\xFF\x90\x8Dc"));
    }

    #[test]
    fn truncated_at_end() {
        assert_eq!(
            vec![(0, 1, 'a'), (1, 4, REPLACEMENT_CHAR)],
            decode(b"a\xF0\x9F\x98")
        );

        let mut chars = Chars::new(b"\xE2\x80");
        assert_eq!(Some((0, 2, REPLACEMENT_CHAR)), chars.next());
        assert_eq!(None, chars.next());
        assert_eq!(None, chars.next());
    }

    #[test]
    fn surrogate_is_invalid() {
        // CESU-8 encoded surrogate half
        let expected = vec![
            (0, 1, REPLACEMENT_CHAR),
            (1, 2, REPLACEMENT_CHAR),
            (2, 3, REPLACEMENT_CHAR),
            (3, 4, 'a'),
        ];
        assert_eq!(expected, decode(b"\xED\xA0\x80a"));
    }

    #[test]
    fn multi_byte() {
        let text = "÷간🥳❤️";
        let expected = vec![
            (0, 2, '÷'),
            (2, 5, '간'),
            (5, 9, '🥳'),
            (9, 12, '❤'),
            (12, 15, '\u{fe0f}'),
        ];
        assert_eq!(expected, decode(text.as_bytes()));

        let decoded: String = Chars::new(text.as_bytes()).map(|(_, _, ch)| ch).collect();
        assert_eq!(text, decoded);
    }

    #[test]
    fn middle_of_char() {
        let text = "§ab".as_bytes();
        assert_eq!(
            vec![(0, 1, REPLACEMENT_CHAR), (1, 2, 'a'), (2, 3, 'b')],
            decode(&text[1..])
        );
    }

    #[test]
    fn clone_looks_ahead() {
        let mut chars = Chars::new(b"abc");
        chars.next();
        let ahead: Vec<char> = chars.clone().map(|(_, _, ch)| ch).collect();
        assert_eq!(vec!['b', 'c'], ahead);
        assert_eq!(1, chars.pos());
        assert_eq!(Some((1, 2, 'b')), chars.next());
    }
}
