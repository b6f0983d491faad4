use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quickmatch::{fuzzy_search, FuzzySearchOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate pronounceable-ish candidate strings of a few words each
fn generate_items(count: usize, rng: &mut StdRng) -> Vec<String> {
    let syllables = [
        "ap", "pel", "gra", "pine", "ora", "nge", "ber", "ry", "mel", "on", "ki", "wi",
    ];
    (0..count)
        .map(|_| {
            let words = rng.gen_range(1..4);
            (0..words)
                .map(|_| {
                    let parts = rng.gen_range(2..4);
                    (0..parts)
                        .map(|_| syllables[rng.gen_range(0..syllables.len())])
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_fuzzy_search(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("fuzzy_search");

    for size in [100, 1_000, 10_000] {
        let items = generate_items(size, &mut rng);

        let single = FuzzySearchOptions::new().with_sort_by_score(true);
        group.bench_with_input(BenchmarkId::new("single_token", size), &items, |b, items| {
            b.iter(|| fuzzy_search(black_box(items), black_box("apel"), &single).unwrap())
        });

        let multi = FuzzySearchOptions::new()
            .with_multi_token(true)
            .with_sort_by_score(true);
        group.bench_with_input(BenchmarkId::new("multi_token", size), &items, |b, items| {
            b.iter(|| fuzzy_search(black_box(items), black_box("apel berry"), &multi).unwrap())
        });

        let spans = FuzzySearchOptions::new().with_include_matches(true);
        group.bench_with_input(BenchmarkId::new("with_spans", size), &items, |b, items| {
            b.iter(|| fuzzy_search(black_box(items), black_box("pine"), &spans).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fuzzy_search);
criterion_main!(benches);
