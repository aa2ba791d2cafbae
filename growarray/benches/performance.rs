use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use growarray::GrowArray;

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push_back", size), size, |b, &size| {
            b.iter(|| {
                let mut array = GrowArray::new().unwrap();

                for i in 0..size {
                    black_box(array.push_back(i).unwrap());
                }

                black_box(array.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("get", size), size, |b, &size| {
            let array = GrowArray::from_values(0..size).unwrap();

            b.iter(|| {
                for i in 0..size {
                    black_box(array.get(i));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("at", size), size, |b, &size| {
            let array = GrowArray::from_values(0..size).unwrap();

            b.iter(|| {
                for i in 0..size {
                    black_box(array.at(i).ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_push_pop_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("push_pop_cycle", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut array = GrowArray::new().unwrap();

                    for i in 0..size {
                        black_box(array.push_back(i).unwrap());
                    }
                    for _ in 0..size {
                        black_box(array.pop_back());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_edge_oscillation(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_oscillation");

    group.bench_function("push_pop_at_grow_line", |b| {
        let mut array = GrowArray::from_values(0..1024).unwrap();

        b.iter(|| {
            black_box(array.push_back(0).unwrap());
            black_box(array.pop_back());
        });
    });
    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert_front", size), size, |b, &size| {
            b.iter(|| {
                let mut array = GrowArray::new().unwrap();

                for i in 0..size {
                    black_box(array.insert(0, i).unwrap());
                }

                black_box(array.len())
            });
        });
    }
    group.finish();
}

fn bench_bulk_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("extend_from_slice", size),
            size,
            |b, &size| {
                let source: Vec<u64> = (0..size as u64).collect();

                b.iter(|| {
                    let mut array = GrowArray::new().unwrap();
                    black_box(array.extend_from_slice(&source).unwrap());
                    black_box(array.len())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_push_pop_cycle,
    bench_edge_oscillation,
    bench_insert_front,
    bench_bulk_append
);
criterion_main!(benches);
