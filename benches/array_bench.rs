//! Criterion benchmarks for the dynamic array and min-heap
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench array_bench
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_array_heaps::{heapsort, DynamicArray, Heap, MinHeap};
use std::hint::black_box;

const SIZES: [u32; 3] = [1 << 8, 1 << 12, 1 << 16];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }
}

fn random_array(n: u32, seed: u64) -> DynamicArray<u32> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next()).collect()
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..n {
                    array.append(black_box(i));
                }
                array
            })
        });
    }
    group.finish();
}

fn bench_insert_remove_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove_front");
    // Quadratic overall; keep sizes small
    for n in [1u32 << 6, 1 << 10] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..n {
                    array.insert_at(0, black_box(i)).unwrap();
                }
                while !array.is_empty() {
                    black_box(array.remove_at(0).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn bench_heap_add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_add_remove_min");
    for n in SIZES {
        let input = random_array(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut heap: MinHeap<u32> = MinHeap::new();
                for value in input {
                    heap.add(*value);
                }
                while let Ok(min) = heap.remove_min() {
                    black_box(min);
                }
            })
        });
    }
    group.finish();
}

fn bench_build_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_heap");
    for n in SIZES {
        let input = random_array(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut heap = MinHeap::new();
                heap.build_heap(black_box(input));
                heap
            })
        });
    }
    group.finish();
}

fn bench_heapsort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapsort");
    for n in SIZES {
        let input = random_array(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut array = input.clone();
                heapsort(&mut array);
                array
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_append,
    bench_insert_remove_front,
    bench_heap_add_remove,
    bench_build_heap,
    bench_heapsort
);
criterion_main!(benches);
