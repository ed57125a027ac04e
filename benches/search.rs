//! Performance benchmarks for wordgrid
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wordgrid::dawg::DawgReader;
use wordgrid::grid::{self, Grid};
use wordgrid::solver::solve;

#[path = "../tests/fixtures/mod.rs"]
mod fixtures;

/// A dictionary big enough to make prefix scans non-trivial
fn bench_dictionary() -> DawgReader {
    let mut words: Vec<String> = fixtures::WORDS.iter().map(|w| w.to_string()).collect();
    for a in b'a'..=b'z' {
        for b in [b'a', b'e', b'i', b'o', b'u'] {
            for c in b'a'..=b'z' {
                words.push(String::from_utf8(vec![a, b, c]).unwrap());
                words.push(String::from_utf8(vec![a, b, c, b's']).unwrap());
            }
        }
    }
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    DawgReader::from_records(&fixtures::encode_words(&refs)).expect("Failed to load dictionary")
}

fn bench_prefix_queries(c: &mut Criterion) {
    let reader = bench_dictionary();
    let mut group = c.benchmark_group("dawg");

    for letters in ["c", "ca", "cat", "cats", "zzz"] {
        group.bench_with_input(BenchmarkId::new("children", letters), &letters, |b, letters| {
            b.iter(|| reader.children(black_box(letters)))
        });
    }
    group.bench_function("is_word", |b| b.iter(|| reader.is_word(black_box("quilt"))));
    group.finish();
}

fn bench_trace(c: &mut Criterion) {
    let board = Grid::parse(fixtures::BOARD).unwrap();
    let mut group = c.benchmark_group("trace");

    for word in ["quilt", "dogs", "xxxxxxxx", "zebra"] {
        group.bench_with_input(BenchmarkId::from_parameter(word), &word, |b, word| {
            b.iter(|| board.can_trace(black_box(word)))
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let reader = bench_dictionary();
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);

    for side in [4, 5] {
        let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(side as u64);
        let board = grid::generate(side, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("board", side), &board, |b, board| {
            b.iter(|| solve(&reader, black_box(board), board.min_word_length()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prefix_queries, bench_trace, bench_solve);
criterion_main!(benches);
