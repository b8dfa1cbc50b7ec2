use termseg::{graphemes, sentences_with, words, Segment, SentenceOptions};

const GRAPHEME_BREAK_TEST: &str = include_str!("data/GraphemeBreakTest.txt");
const WORD_BREAK_TEST: &str = include_str!("data/WordBreakTest.txt");
const SENTENCE_BREAK_TEST: &str = include_str!("data/SentenceBreakTest.txt");

/// One line of a break test file: the text and the byte offsets of every
/// boundary, including start and end of text
#[derive(Debug)]
struct Case {
    line: usize,
    text: String,
    boundaries: Vec<usize>,
}

fn parse(data: &str) -> Vec<Case> {
    data.lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let line_no_comment = line.split('#').next().unwrap_or("").trim();
            if line_no_comment.is_empty() {
                return None;
            }

            let mut text = String::new();
            let mut boundaries = vec![];
            for token in line_no_comment.split_whitespace() {
                match token {
                    "÷" => boundaries.push(text.len()),
                    "×" => {}
                    hex => {
                        let cp = u32::from_str_radix(hex, 16).expect("hex code point");
                        text.push(char::from_u32(cp).expect("unicode scalar value"));
                    }
                }
            }

            Some(Case {
                line: n + 1,
                text,
                boundaries,
            })
        })
        .collect()
}

fn boundaries<'a, I: Iterator<Item = Segment<'a>>>(segments: I) -> Vec<usize> {
    let mut result = vec![0];
    result.extend(segments.map(|s| s.end()));
    result
}

fn check<F: Fn(&str) -> Vec<usize>>(name: &str, data: &str, segment: F) {
    let cases = parse(data);
    assert!(!cases.is_empty(), "{name}: no test cases");

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let actual = segment(&case.text);
            (actual != case.boundaries).then(|| {
                format!(
                    "line {}: {:?} expected {:?}, got {:?}",
                    case.line, case.text, case.boundaries, actual
                )
            })
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{name}: {} of {} cases failed\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn parse_case() {
    let cases = parse("# comment\n\n÷ 0061 × 0308 ÷ 0020 ÷ # a, diaeresis, space\n");
    assert_eq!(1, cases.len());
    assert_eq!(3, cases[0].line);
    assert_eq!("a\u{0308} ", cases[0].text);
    assert_eq!(vec![0, 3, 4], cases[0].boundaries);
}

#[test]
fn grapheme_break_test() {
    check("GraphemeBreakTest", GRAPHEME_BREAK_TEST, |text| {
        boundaries(graphemes(text))
    });
}

#[test]
fn word_break_test() {
    check("WordBreakTest", WORD_BREAK_TEST, |text| boundaries(words(text)));
}

#[test]
fn sentence_break_test() {
    // Abbreviations are a tailoring, the test data is for plain UAX #29
    let options = SentenceOptions::none();
    check("SentenceBreakTest", SENTENCE_BREAK_TEST, |text| {
        boundaries(sentences_with(text, &options))
    });
}
