//! Benchmark for PersistentSequence vs standard VecDeque.
//!
//! Compares the finger-tree-backed sequence against Rust's standard VecDeque
//! for end pushes, end pops, indexed access, and concatenation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fingerseq::persistent::{PersistentSequence, Seq};
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// cons Benchmark (prepend)
// =============================================================================

fn benchmark_cons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cons");

    for size in [100, 1000, 10000] {
        // PersistentSequence cons (amortized O(1))
        group.bench_with_input(
            BenchmarkId::new("PersistentSequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sequence = PersistentSequence::new();
                    for index in 0..size {
                        sequence = sequence.cons(black_box(index));
                    }
                    black_box(sequence)
                });
            },
        );

        // VecDeque push_front
        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_front(black_box(index));
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// consume (pop_front repeatedly) Benchmark
// =============================================================================

fn benchmark_consume(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("consume");

    for size in [100, 1000] {
        let sequence: PersistentSequence<i32> = (0..size).collect();
        let deque: VecDeque<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentSequence", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut current = sequence.clone();
                    let mut total = 0i64;
                    while let Some((head, rest)) = current.pop_front() {
                        total += i64::from(*head);
                        current = rest;
                    }
                    black_box(total)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut current = deque.clone();
                    let mut total = 0i64;
                    while let Some(front) = current.pop_front() {
                        total += i64::from(front);
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark (indexed access)
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let sequence: PersistentSequence<usize> = (0..size).collect();
        let deque: VecDeque<usize> = (0..size).collect();

        // PersistentSequence get (O(log n))
        group.bench_with_input(
            BenchmarkId::new("PersistentSequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut total = 0usize;
                    for index in 0..size {
                        total += sequence.get(black_box(index)).copied().unwrap_or(0);
                    }
                    black_box(total)
                });
            },
        );

        // VecDeque get (O(1))
        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut total = 0usize;
                    for index in 0..size {
                        total += deque.get(black_box(index)).copied().unwrap_or(0);
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// set Benchmark (persistent update)
// =============================================================================

fn benchmark_set(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set");

    for size in [100, 1000, 10000] {
        let sequence: PersistentSequence<usize> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("PersistentSequence", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let updated = sequence.set(black_box(size / 2), black_box(0));
                    black_box(updated)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// concat Benchmark
// =============================================================================

fn benchmark_concat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("concat");

    for size in [100, 1000, 10000] {
        let left: PersistentSequence<i32> = (0..size).collect();
        let right: PersistentSequence<i32> = (size..size * 2).collect();

        // PersistentSequence concat (O(log(min(m, n))))
        group.bench_with_input(
            BenchmarkId::new("PersistentSequence", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let joined = left.concat(black_box(&right));
                    black_box(joined)
                });
            },
        );

        // VecDeque extend (O(n))
        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut joined: VecDeque<i32> = (0..size).collect();
                    joined.extend(size..size * 2);
                    black_box(joined)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_cons,
    benchmark_consume,
    benchmark_get,
    benchmark_set,
    benchmark_concat,
);
criterion_main!(benches);
