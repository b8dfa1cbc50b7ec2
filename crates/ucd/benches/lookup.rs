use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termseg_ucd::{east_asian_width, grapheme_break, line_break, Property};

fn grapheme_break_lookup(c: &mut Criterion) {
    c.bench_function("grapheme_break_ascii", |bench| {
        bench.iter(move || {
            grapheme_break(black_box('a'));
        });
    });

    c.bench_function("grapheme_break_emoji", |bench| {
        bench.iter(move || {
            grapheme_break(black_box('🥳'));
        });
    });
}

fn other_lookups(c: &mut Criterion) {
    c.bench_function("line_break", |bench| {
        bench.iter(move || {
            line_break(black_box('간'));
        });
    });

    c.bench_function("east_asian_width", |bench| {
        bench.iter(move || {
            east_asian_width(black_box('간'));
        });
    });

    c.bench_function("extended_pictographic", |bench| {
        bench.iter(move || {
            Property::ExtendedPictographic.check(black_box('❤'));
        });
    });
}

criterion_group!(benches, grapheme_break_lookup, other_lookups);
criterion_main!(benches);
