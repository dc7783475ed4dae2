use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::collections::VecDeque;
use str_queue::StrQueue;

fn bench_queue(c: &mut Criterion) {
    let n = 256;
    let values: Vec<String> = (0..n).map(|i| format!("value-{i:04}")).collect();

    {
        let mut group = c.benchmark_group("VecDeque vs StrQueue (PushBack 256)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d: VecDeque<String> = VecDeque::new();
                for v in &values {
                    d.push_back(black_box(v.clone()));
                }
                d
            })
        });

        group.bench_function("StrQueue", |b| {
            b.iter(|| {
                let mut q = StrQueue::new();
                for v in &values {
                    q.push_back(black_box(v));
                }
                q
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs StrQueue (PushPop 256)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d: VecDeque<String> = VecDeque::new();
                for v in &values {
                    d.push_back(v.clone());
                }
                while let Some(v) = d.pop_front() {
                    black_box(v);
                }
            })
        });

        group.bench_function("StrQueue", |b| {
            b.iter(|| {
                let mut q = StrQueue::new();
                for v in &values {
                    q.push_back(v);
                }
                while let Some(v) = q.pop_front() {
                    black_box(v);
                }
            })
        });
        group.finish();
    }

    {
        let shuffled: Vec<String> = (0..n).map(|i| format!("value-{:04}", (i * 101) % n)).collect();

        let mut group = c.benchmark_group("Sort 256 strings");
        group.bench_function("Vec::sort", |b| {
            b.iter(|| {
                let mut v = shuffled.clone();
                v.sort();
                v
            })
        });

        group.bench_function("StrQueue::sort (linked merge sort)", |b| {
            b.iter(|| {
                let mut q: StrQueue = shuffled.iter().collect();
                q.sort();
                q
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Reverse 256 strings");
        group.bench_function("VecDeque (iterator reverse)", |b| {
            let d: VecDeque<String> = values.iter().cloned().collect();
            b.iter(|| {
                let r: VecDeque<String> = d.iter().cloned().rev().collect();
                r
            })
        });

        group.bench_function("StrQueue::reverse (in-place relink)", |b| {
            let mut q: StrQueue = values.iter().collect();
            b.iter(|| {
                q.reverse();
                black_box(q.front());
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_queue);
criterion_main!(benches);
