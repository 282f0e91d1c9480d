// Compares the iterative and recursive strategies on the same random workloads.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lazy_segment_tree::{
    Action, IterativeLazySegmentTree, LazySegmentTree, Monoid, RecursiveLazySegmentTree,
};

// =============================================================================
// Algebra
// =============================================================================

/// `(sum, count)` pairs in wrapping arithmetic.
struct CountedSum;

impl Monoid for CountedSum {
    type Item = (u64, u64);

    fn identity(&self) -> (u64, u64) {
        (0, 0)
    }

    fn combine(&self, lhs: &(u64, u64), rhs: &(u64, u64)) -> (u64, u64) {
        (lhs.0.wrapping_add(rhs.0), lhs.1 + rhs.1)
    }
}

struct Add;

impl Monoid for Add {
    type Item = u64;

    fn identity(&self) -> u64 {
        0
    }

    fn combine(&self, lhs: &u64, rhs: &u64) -> u64 {
        lhs.wrapping_add(*rhs)
    }
}

impl Action<CountedSum> for Add {
    fn map(&self, f: &u64, x: &(u64, u64)) -> (u64, u64) {
        (x.0.wrapping_add(f.wrapping_mul(x.1)), x.1)
    }
}

// =============================================================================
// Benchmark Helpers
// =============================================================================

enum Query {
    Set(usize, usize, u64),
    Get(usize, usize),
    Update(usize, u64),
}

fn random_range(rng: &mut StdRng, len: usize) -> (usize, usize) {
    let a = rng.gen_range(0..=len);
    let b = rng.gen_range(0..=len);
    (a.min(b), a.max(b))
}

fn random_queries(rng: &mut StdRng, len: usize, count: usize) -> Vec<Query> {
    (0..count)
        .map(|_| match rng.gen_range(0..3) {
            0 => {
                let (start, end) = random_range(rng, len);
                Query::Set(start, end, rng.gen_range(0..1_000))
            }
            1 => {
                let (start, end) = random_range(rng, len);
                Query::Get(start, end)
            }
            _ => Query::Update(rng.gen_range(0..len), rng.gen_range(0..1_000)),
        })
        .collect()
}

fn elements(rng: &mut StdRng, len: usize) -> Vec<(u64, u64)> {
    (0..len).map(|_| (rng.gen_range(0..1_000), 1)).collect()
}

fn run<T>(tree: &mut T, queries: &[Query]) -> u64
where
    T: LazySegmentTree<Value = (u64, u64), Update = u64>,
{
    let mut checksum = 0u64;
    for query in queries {
        match *query {
            Query::Set(start, end, f) => tree.set(start..end, f),
            Query::Get(start, end) => checksum = checksum.wrapping_add(tree.get(start..end).0),
            Query::Update(index, value) => tree.update(index, (value, 1)),
        }
    }
    checksum
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for len in [1_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let elements = elements(&mut rng, len);

        group.bench_with_input(
            BenchmarkId::new("IterativeLazySegmentTree", len),
            &elements,
            |b, elements| {
                b.iter_batched(
                    || elements.clone(),
                    |elements| IterativeLazySegmentTree::new(CountedSum, Add, elements),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("RecursiveLazySegmentTree", len),
            &elements,
            |b, elements| {
                b.iter_batched(
                    || elements.clone(),
                    |elements| RecursiveLazySegmentTree::new(CountedSum, Add, elements),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_mixed_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_queries");

    for len in [1_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let elements = elements(&mut rng, len);
        let queries = random_queries(&mut rng, len, 10_000);

        group.bench_with_input(
            BenchmarkId::new("IterativeLazySegmentTree", len),
            &queries,
            |b, queries| {
                b.iter_batched(
                    || IterativeLazySegmentTree::new(CountedSum, Add, elements.clone()).unwrap(),
                    |mut tree| black_box(run(&mut tree, queries)),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("RecursiveLazySegmentTree", len),
            &queries,
            |b, queries| {
                b.iter_batched(
                    || RecursiveLazySegmentTree::new(CountedSum, Add, elements.clone()).unwrap(),
                    |mut tree| black_box(run(&mut tree, queries)),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_build, bench_mixed_queries);

criterion_main!(benches);
