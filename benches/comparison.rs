use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dashmap::DashMap;
use smap::{LockedMap, Smap, SmapBuilder};
use std::sync::Arc;
use std::thread;

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("test{}", i)).collect()
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    let keys = keys(1000);

    // Single-lock baseline
    group.bench_function("locked_map", |b| {
        let map = LockedMap::new();
        b.iter(|| {
            for (i, key) in keys.iter().enumerate() {
                map.set(key.clone(), i);
            }
        });
    });

    group.bench_function("dashmap", |b| {
        let map = DashMap::new();
        b.iter(|| {
            for (i, key) in keys.iter().enumerate() {
                map.insert(key.clone(), i);
            }
        });
    });

    for shard_count in [4, 16, 64] {
        group.bench_with_input(
            BenchmarkId::new("smap", shard_count),
            &shard_count,
            |b, &shard_count| {
                let map = SmapBuilder::new()
                    .shard_count(shard_count)
                    .unwrap()
                    .build::<String, usize>()
                    .unwrap();
                b.iter(|| {
                    for (i, key) in keys.iter().enumerate() {
                        map.set(key.clone(), i);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    let keys = keys(1000);

    let locked = LockedMap::new();
    let dashmap = DashMap::new();
    let smap = Smap::new();
    for (i, key) in keys.iter().enumerate() {
        locked.set(key.clone(), i);
        dashmap.insert(key.clone(), i);
        smap.set(key.clone(), i);
    }

    group.bench_function("locked_map", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(locked.get(key));
            }
        });
    });

    group.bench_function("dashmap", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(dashmap.get(key).map(|v| *v));
            }
        });
    });

    group.bench_function("smap", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(smap.get(key));
            }
        });
    });

    group.finish();
}

/// Each thread sets a fresh key and reads it straight back.
fn bench_paired_set_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("paired_set_get");

    let num_threads = 8;
    let ops_per_thread = 5_000;

    group.bench_function("locked_map", |b| {
        b.iter_custom(|iters| {
            let start = std::time::Instant::now();
            for _ in 0..iters {
                let map = Arc::new(LockedMap::new());
                let mut handles = vec![];

                for thread_id in 0..num_threads {
                    let map = Arc::clone(&map);
                    handles.push(thread::spawn(move || {
                        for i in 0..ops_per_thread {
                            let n = thread_id * ops_per_thread + i;
                            let key = format!("test{}", n);
                            map.set(key.clone(), n);
                            black_box(map.get(&key));
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            }
            start.elapsed()
        });
    });

    group.bench_function("dashmap", |b| {
        b.iter_custom(|iters| {
            let start = std::time::Instant::now();
            for _ in 0..iters {
                let map = Arc::new(DashMap::new());
                let mut handles = vec![];

                for thread_id in 0..num_threads {
                    let map = Arc::clone(&map);
                    handles.push(thread::spawn(move || {
                        for i in 0..ops_per_thread {
                            let n = thread_id * ops_per_thread + i;
                            let key = format!("test{}", n);
                            map.insert(key.clone(), n);
                            black_box(map.get(&key).map(|v| *v));
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            }
            start.elapsed()
        });
    });

    for shard_count in [16, 64] {
        group.bench_with_input(
            BenchmarkId::new("smap", shard_count),
            &shard_count,
            |b, &shard_count| {
                b.iter_custom(|iters| {
                    let start = std::time::Instant::now();
                    for _ in 0..iters {
                        let map = Arc::new(
                            SmapBuilder::new()
                                .shard_count(shard_count)
                                .unwrap()
                                .build::<String, usize>()
                                .unwrap(),
                        );
                        let mut handles = vec![];

                        for thread_id in 0..num_threads {
                            let map = Arc::clone(&map);
                            handles.push(thread::spawn(move || {
                                for i in 0..ops_per_thread {
                                    let n = thread_id * ops_per_thread + i;
                                    let key = format!("test{}", n);
                                    map.set(key.clone(), n);
                                    black_box(map.get(&key));
                                }
                            }));
                        }

                        for handle in handles {
                            handle.join().unwrap();
                        }
                    }
                    start.elapsed()
                });
            },
        );
    }

    group.finish();
}

/// 90% reads over a preloaded key space, with a full `range` every 1000 ops.
fn bench_read_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_heavy");

    let num_threads = 8;
    let ops_per_thread = 5_000;
    let key_space = 10_000;

    group.bench_function("locked_map", |b| {
        let map = Arc::new(LockedMap::new());
        for i in 0..key_space {
            map.set(i, i);
        }
        b.iter_custom(|iters| {
            let start = std::time::Instant::now();
            for _ in 0..iters {
                let mut handles = vec![];
                for thread_id in 0..num_threads {
                    let map = Arc::clone(&map);
                    handles.push(thread::spawn(move || {
                        for i in 0..ops_per_thread {
                            let key = (thread_id * ops_per_thread + i) % key_space;
                            if i % 10 == 0 {
                                map.set(key, i);
                            } else {
                                black_box(map.get(&key));
                            }
                            if i % 1000 == 0 {
                                let mut n = 0;
                                map.range(|_, _| {
                                    n += 1;
                                    true
                                });
                                black_box(n);
                            }
                        }
                    }));
                }
                for handle in handles {
                    handle.join().unwrap();
                }
            }
            start.elapsed()
        });
    });

    group.bench_function("smap", |b| {
        let map = Arc::new(Smap::new());
        for i in 0..key_space {
            map.set(i, i);
        }
        b.iter_custom(|iters| {
            let start = std::time::Instant::now();
            for _ in 0..iters {
                let mut handles = vec![];
                for thread_id in 0..num_threads {
                    let map = Arc::clone(&map);
                    handles.push(thread::spawn(move || {
                        for i in 0..ops_per_thread {
                            let key = (thread_id * ops_per_thread + i) % key_space;
                            if i % 10 == 0 {
                                map.set(key, i);
                            } else {
                                black_box(map.get(&key));
                            }
                            if i % 1000 == 0 {
                                let mut n = 0;
                                map.range(|_, _| {
                                    n += 1;
                                    true
                                });
                                black_box(n);
                            }
                        }
                    }));
                }
                for handle in handles {
                    handle.join().unwrap();
                }
            }
            start.elapsed()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_set,
    bench_get,
    bench_paired_set_get,
    bench_read_heavy
);
criterion_main!(benches);
