use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;
use std::hint::black_box;
use wordset::test_utils::env_usize;
use wordset::{BitSet, WordSet};

const DEFAULT_SAMPLE_SIZE: usize = 50;
const DEFAULT_WORDS: usize = 1_024;

#[derive(Clone, Copy)]
struct Scenario {
    name: &'static str,
    /// Probability that any given bit is set, in 1/256ths.
    density: u8,
}

const SCENARIOS: [Scenario; 3] = [
    Scenario {
        name: "sparse",
        density: 1,
    },
    Scenario {
        name: "half",
        density: 128,
    },
    Scenario {
        name: "dense",
        density: 250,
    },
];

fn build_words(runner: &mut TestRunner, words: usize, density: u8) -> Vec<u64> {
    let strategy = prop::collection::vec(prop::collection::vec(any::<u8>(), 64), words);
    let tree = strategy
        .new_tree(runner)
        .expect("failed to generate benchmark words");

    tree.current()
        .into_iter()
        .map(|bytes| {
            bytes
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b < density)
                .fold(0u64, |word, (bit, _)| word | (1u64 << bit))
        })
        .collect()
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");
    group.sample_size(env_usize("WORDSET_BENCH_SAMPLE_SIZE").unwrap_or(DEFAULT_SAMPLE_SIZE));

    // Env overrides: WORDSET_BENCH_WORDS, WORDSET_BENCH_SAMPLE_SIZE.
    let words = env_usize("WORDSET_BENCH_WORDS").unwrap_or(DEFAULT_WORDS);
    group.throughput(Throughput::Elements(words as u64));

    for scenario in SCENARIOS {
        let mut runner = TestRunner::deterministic();
        let a = BitSet::from_words(build_words(&mut runner, words, scenario.density));
        // Shorter right operand so the unequal-length paths are measured.
        let b = BitSet::from_words(build_words(&mut runner, words / 2, scenario.density));

        group.bench_with_input(
            BenchmarkId::new("union", scenario.name),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| black_box(a.union(*b))),
        );
        group.bench_with_input(
            BenchmarkId::new("intersection", scenario.name),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| black_box(a.intersection(*b))),
        );
        group.bench_with_input(BenchmarkId::new("count", scenario.name), &a, |bench, a| {
            bench.iter(|| black_box(a.count()))
        });
        group.bench_with_input(BenchmarkId::new("iter", scenario.name), &a, |bench, a| {
            bench.iter(|| black_box(a.iter().fold(0usize, |acc, x| acc ^ x)))
        });
        group.bench_with_input(
            BenchmarkId::new("for_each_member", scenario.name),
            &a,
            |bench, a| {
                bench.iter(|| {
                    let mut acc = 0usize;
                    a.for_each_member(|x| acc ^= x);
                    black_box(acc)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_algebra);
criterion_main!(benches);
