use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termseg::{graphemes, line_breaks, sentences, width, words, Stepper};

const LATIN: &str = "The quick brown fox jumps over the lazy dog. Mr. Smith paid $1,234.56 for it, didn't he? ";
const MIXED: &str = "日本語のテキスト、한국어 텍스트 🏳️‍🌈👨‍👩‍👧 🇫🇮🇩🇪 नमस्ते e\u{0301} ";

fn text(sample: &str) -> String {
    sample.repeat(200)
}

fn segmentation(c: &mut Criterion) {
    let latin = text(LATIN);
    let mixed = text(MIXED);

    c.bench_function("graphemes_latin", |bench| {
        bench.iter(|| graphemes(black_box(&latin)).count());
    });

    c.bench_function("graphemes_mixed", |bench| {
        bench.iter(|| graphemes(black_box(&mixed)).count());
    });

    c.bench_function("words_latin", |bench| {
        bench.iter(|| words(black_box(&latin)).count());
    });

    c.bench_function("sentences_latin", |bench| {
        bench.iter(|| sentences(black_box(&latin)).count());
    });

    c.bench_function("line_breaks_mixed", |bench| {
        bench.iter(|| line_breaks(black_box(&mixed)).count());
    });
}

fn widths(c: &mut Criterion) {
    let mixed = text(MIXED);

    c.bench_function("width_mixed", |bench| {
        bench.iter(|| width(black_box(&mixed)));
    });

    c.bench_function("stepper_mixed", |bench| {
        bench.iter(|| Stepper::new(black_box(&mixed)).count());
    });
}

criterion_group!(benches, segmentation, widths);
criterion_main!(benches);
