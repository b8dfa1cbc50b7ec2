use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use termseg::{
    grapheme_count, graphemes, line_breaks, line_segments, sentences, width, words,
    BreakOpportunity, Segment, Segmenter, Stepper, Unit,
};

const ROUNDS: u64 = 300;

/// Code points that exercise the interesting rules
const PALETTE: &[char] = &[
    'a', 'Z', 'i', '1', '9', '.', ',', '\'', '"', '(', ')', '!', '?', '-', '$', '%', '_', ':',
    ' ', ' ', '\t', '\r', '\n', '\u{0085}', '\u{2028}', '\u{3000}', '\u{0301}', '\u{093F}',
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{00A0}', '\u{00AD}', '\u{FE0E}',
    '\u{FE0F}', '\u{1F1E9}', '\u{1F1EA}', '\u{1100}', '\u{1161}', '\u{11A8}', '가', '간', '👍',
    '\u{1F3FB}', '👨', '🌈', '❤', '\u{2E3A}', '\u{2E3B}', 'क', '\u{094D}', 'ष', '\u{0600}', 'א',
    '日', '。', 'カ', 'ก', '\u{0E34}', '±',
];

fn random_text(gen: &mut ChaCha8Rng) -> String {
    let len = gen.next_u32() as usize % 40;
    (0..len)
        .map(|_| PALETTE[gen.next_u32() as usize % PALETTE.len()])
        .collect()
}

fn random_bytes(gen: &mut ChaCha8Rng) -> Vec<u8> {
    let len = gen.next_u32() as usize % 40;
    let mut bytes = vec![0u8; len];
    gen.fill_bytes(&mut bytes);
    bytes
}

fn texts() -> impl Iterator<Item = String> {
    (0..ROUNDS).map(|seed| {
        let mut gen = ChaCha8Rng::seed_from_u64(seed);
        random_text(&mut gen)
    })
}

/// Segments cover the input exactly, in order and without empty segments
fn assert_covers<'a>(text: &[u8], segments: impl Iterator<Item = Segment<'a>>) {
    let mut pos = 0;
    for segment in segments {
        assert_eq!(pos, segment.start(), "gap or overlap in {:?}", text);
        assert!(!segment.is_empty(), "empty segment in {:?}", text);
        assert_eq!(&text[segment.range()], segment.as_bytes());
        pos = segment.end();
    }
    assert_eq!(text.len(), pos, "segments do not reach the end of {:?}", text);
}

#[test]
fn segments_reconstruct_input() {
    for text in texts() {
        let bytes = text.as_bytes();
        assert_covers(bytes, graphemes(&text));
        assert_covers(bytes, words(&text));
        assert_covers(bytes, sentences(&text));
        assert_covers(bytes, line_segments(&text).map(|(s, _)| s));

        let joined: String = graphemes(&text).map(|g| g.to_string()).collect();
        assert_eq!(text, joined);
    }
}

#[test]
fn invalid_input_makes_progress() {
    for seed in 0..ROUNDS {
        let mut gen = ChaCha8Rng::seed_from_u64(seed);
        let bytes = random_bytes(&mut gen);
        assert_covers(&bytes, graphemes(&bytes));
        assert_covers(&bytes, words(&bytes));
        assert_covers(&bytes, sentences(&bytes));
        assert_covers(&bytes, line_segments(&bytes).map(|(s, _)| s));
        assert!(grapheme_count(&bytes) <= bytes.len());
    }
}

#[test]
fn cluster_widths_sum_to_string_width() {
    for text in texts() {
        let total = width(&text);
        let clusters: usize = Segmenter::new(&text, Unit::Grapheme).map(|s| s.width).sum();
        let steps: usize = Stepper::new(&text).map(|s| s.width).sum();

        assert_eq!(total, clusters, "{:?}", text);
        assert_eq!(total, steps, "{:?}", text);
    }
}

#[test]
fn boundaries_strictly_increase() {
    for text in texts() {
        let mut prev = 0;
        let mut last = None;
        for (pos, opportunity) in line_breaks(&text) {
            assert!(prev < pos, "{:?}", text);
            prev = pos;
            last = Some((pos, opportunity));
        }

        if !text.is_empty() {
            assert_eq!(Some((text.len(), BreakOpportunity::Mandatory)), last);
        }

        let ends: Vec<usize> = words(&text).map(|w| w.end()).collect();
        assert!(ends.windows(2).all(|w| w[0] < w[1]), "{:?}", text);
    }
}

#[test]
fn stepper_agrees_with_engines() {
    for text in texts() {
        let word_ends: Vec<usize> = words(&text).map(|w| w.end()).collect();
        let sentence_ends: Vec<usize> = sentences(&text).map(|s| s.end()).collect();
        let breaks: Vec<(usize, BreakOpportunity)> = line_breaks(&text).collect();
        let clusters: Vec<Segment> = graphemes(&text).collect();

        let steps: Vec<_> = Stepper::new(&text).collect();
        assert_eq!(clusters.len(), steps.len());

        for (step, cluster) in steps.iter().zip(clusters.iter()) {
            let end = cluster.end();
            assert_eq!(*cluster, step.cluster);
            assert_eq!(word_ends.contains(&end), step.word_boundary, "{:?}", text);
            assert_eq!(sentence_ends.contains(&end), step.sentence_boundary, "{:?}", text);

            let line = breaks.iter().find(|(pos, _)| *pos == end).map(|(_, op)| *op);
            assert_eq!(Some(step.line_break), line, "{:?}", text);
        }
    }
}

#[test]
fn joined_text_is_segmented_again() {
    let cases = [
        ("🇩", "🇪", 1),
        ("a", "\u{0301}", 1),
        ("\r", "\n", 1),
        ("🌈\u{200D}", "🌈", 1),
        ("क\u{094D}", "ष", 1),
        ("ab", "c", 3),
    ];

    for (a, b, expected) in cases {
        let joined = format!("{a}{b}");
        let separately = grapheme_count(a) + grapheme_count(b);
        assert_eq!(expected, grapheme_count(&joined), "{:?}", joined);
        assert!(grapheme_count(&joined) <= separately);
    }

    assert_eq!(2, words("'t").count());
    assert_eq!(1, words("can't").count());
}

#[test]
fn concrete_cases() {
    let rainbow = "🏳️‍🌈";
    assert_eq!(4, rainbow.chars().count());
    assert_eq!(1, grapheme_count(rainbow));
    assert_eq!(2, width(rainbow));

    let abc: Vec<usize> = Segmenter::new("abc", Unit::Grapheme).map(|s| s.width).collect();
    assert_eq!(vec![1, 1, 1], abc);
    assert_eq!(3, width("abc"));

    assert_eq!(1, grapheme_count("\u{2E3A}"));
    assert_eq!(3, width("\u{2E3A}"));

    assert_eq!(1, grapheme_count("🇩🇪"));
    assert_eq!(2, width("🇩🇪"));

    let flags: Vec<usize> = Segmenter::new("🇩🇪🇫", Unit::Grapheme)
        .map(|s| s.width)
        .collect();
    assert_eq!(vec![2, 2], flags);

    assert_eq!(1, sentences("Mr. Smith").count());
    let two: Vec<String> = sentences("He left. She stayed.")
        .map(|s| s.to_string())
        .collect();
    assert_eq!(vec!["He left. ", "She stayed."], two);
}
