// benches/access_patterns.rs

use array_list::{ArrayList, List};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn create_list(size: usize) -> ArrayList<u64> {
    let mut list = ArrayList::with_capacity(size);
    for i in 0..size {
        list.add((i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    }
    list
}

fn bench_add(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("add_from_empty");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut list = ArrayList::new();
                for i in 0..size {
                    list.add(black_box(i));
                }
                list
            });
        });
    }
    group.finish();
}

fn bench_individual_get(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("individual_get");
    for size in sizes {
        let list = create_list(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..list.len() {
                    sum = sum.wrapping_add(black_box(*list.get(i).unwrap()));
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_iter_vs_cursor(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("traversal");
    for size in sizes {
        let list = create_list(size);

        group.bench_with_input(BenchmarkId::new("iter", size), &size, |b, _| {
            b.iter(|| list.iter().fold(0u64, |acc, v| acc.wrapping_add(black_box(*v))));
        });

        group.bench_with_input(BenchmarkId::new("cursor", size), &size, |b, _| {
            b.iter(|| {
                let mut cursor = list.cursor();
                let mut sum = 0u64;
                while cursor.has_next(&list).unwrap() {
                    sum = sum.wrapping_add(black_box(*cursor.next(&list).unwrap()));
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_remove_front(c: &mut Criterion) {
    let sizes = vec![100, 1_000];

    let mut group = c.benchmark_group("remove_front");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || create_list(size),
                |mut list| {
                    while !list.is_empty() {
                        black_box(list.remove(0).unwrap());
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000];

    let mut group = c.benchmark_group("sort");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || create_list(size),
                |mut list| list.sort(),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_individual_get,
    bench_iter_vs_cursor,
    bench_remove_front,
    bench_sort
);
criterion_main!(benches);
