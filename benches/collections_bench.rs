//! Criterion benchmarks for the collections
//!
//! Run with `cargo bench`. Inputs come from a fixed-seed LCG so runs are
//! comparable.

use classic_adts::binary_heap::BinaryMinHeap;
use classic_adts::bst::BinarySearchTree;
use classic_adts::queue::Queue;
use classic_adts::union_find::UnionFind;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> i64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 33) as i64
    }
}

fn random_values(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next()).collect()
}

fn bench_heap_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap_push_pop");
    for size in [100usize, 1_000, 10_000] {
        let values = random_values(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryMinHeap::with_capacity(values.len());
                for &v in values {
                    heap.push(v);
                }
                while let Ok(v) = heap.pop() {
                    black_box(v);
                }
            })
        });
    }
    group.finish();
}

fn bench_heap_remove_first_occurrence(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap_remove_first_occurrence");
    for size in [100usize, 1_000] {
        let values = random_values(size, 7);
        let heap: BinaryMinHeap = values.iter().copied().collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let mut heap = heap.clone();
                for &v in values.iter().step_by(2) {
                    black_box(heap.remove_first_occurrence(v)).ok();
                }
            })
        });
    }
    group.finish();
}

fn bench_queue(c: &mut Criterion) {
    c.bench_function("queue_enqueue_dequeue_10000", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for i in 0..10_000 {
                queue.enqueue(i);
            }
            while let Ok(v) = queue.dequeue() {
                black_box(v);
            }
        })
    });
}

fn bench_bst(c: &mut Criterion) {
    let values = random_values(10_000, 3);
    c.bench_function("bst_insert_contains_10000", |b| {
        b.iter(|| {
            let mut tree = BinarySearchTree::new();
            for &v in &values {
                let _ = tree.insert(v);
            }
            for &v in &values {
                black_box(tree.contains(v));
            }
        })
    });
}

fn bench_union_find(c: &mut Criterion) {
    let mut rng = Lcg::new(11);
    let pairs: Vec<(usize, usize)> = (0..10_000)
        .map(|_| ((rng.next() % 10_000) as usize, (rng.next() % 10_000) as usize))
        .collect();
    c.bench_function("union_find_10000", |b| {
        b.iter(|| {
            let mut uf = UnionFind::with_size(10_000).unwrap();
            for &(a, b) in &pairs {
                uf.union(a, b).unwrap();
            }
            black_box(uf.components())
        })
    });
}

criterion_group!(
    benches,
    bench_heap_push_pop,
    bench_heap_remove_first_occurrence,
    bench_queue,
    bench_bst,
    bench_union_find
);
criterion_main!(benches);
