// Criterion benchmarks for the break-point engine.
//
// Uses an embedded pattern set so the benchmarks run without any external
// dictionary files.
//
// Run:
//   cargo bench -p hyphora-engine

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use hyphora_engine::{HyphenDict, HyphenationCursor, hyphenate};

const PATTERNS: &str = "\
UTF-8
LEFTHYPHENMIN 2
RIGHTHYPHENMIN 2
y1p
n1a
a1t
e1n
e2na
t1i
o1n
1na
NEXTLEVEL
a1b
t1e
";

const WORDS: &[&str] = &[
    "hyphenation",
    "nation",
    "international",
    "antidisestablishmentarianism",
    "cat",
    "phenomenon",
    "attenuation",
];

fn bench_hyphenate(c: &mut Criterion) {
    let dict = HyphenDict::from_source(PATTERNS).unwrap();

    c.bench_function("hyphenate/word", |b| {
        b.iter(|| hyphenate(&dict, black_box("hyphenation")))
    });

    c.bench_function("hyphenate/wordlist", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(hyphenate(&dict, word));
            }
        })
    });
}

fn bench_cursor(c: &mut Criterion) {
    let dict = Arc::new(HyphenDict::from_source(PATTERNS).unwrap());

    c.bench_function("cursor/walk", |b| {
        b.iter(|| {
            let mut cursor = HyphenationCursor::new(Arc::clone(&dict));
            let mut count = 0usize;
            for word in WORDS {
                cursor.set_word(word);
                let mut item = cursor.first().unwrap();
                while let Some(brk) = item {
                    count += brk.position();
                    item = cursor.next().unwrap();
                }
            }
            black_box(count)
        })
    });
}

criterion_group!(benches, bench_hyphenate, bench_cursor);
criterion_main!(benches);
