//! Benchmarks for similarity and ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memeboard_search::{rank, score, similarity, Item, DEFAULT_THRESHOLD};

const WORDS: &[&str] = &[
    "chokbar", "grand", "chat", "dort", "bonjour", "monde", "meme", "drole", "lundi", "cafe",
];

fn create_test_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let title = format!(
                "{} {} {}",
                WORDS[i % WORDS.len()],
                WORDS[(i / 3) % WORDS.len()],
                WORDS[(i / 7) % WORDS.len()]
            );
            Item::new(i.to_string(), title)
        })
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("similarity_short", |b| {
        b.iter(|| similarity(black_box("helo"), black_box("Hello world")))
    });

    c.bench_function("score_fallback", |b| {
        b.iter(|| score(black_box("chakbar"), black_box("Le grand n'importe quoi")))
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [10, 100, 1000, 10000].iter() {
        let items = create_test_items(*size);

        group.bench_with_input(BenchmarkId::new("fuzzy_query", size), size, |b, _| {
            b.iter(|| rank(black_box(&items), black_box("chokbr"), DEFAULT_THRESHOLD))
        });

        group.bench_with_input(BenchmarkId::new("blank_query", size), size, |b, _| {
            b.iter(|| rank(black_box(&items), black_box(""), DEFAULT_THRESHOLD))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_similarity, bench_rank);
criterion_main!(benches);
