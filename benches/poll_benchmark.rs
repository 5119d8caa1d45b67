/*!
 * Poll Benchmarks
 *
 * Measure activation and drain throughput at varying queue capacities
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use readypoll::{EventSet, PollInstance, ReadyEvent};

fn bench_activate_wait_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("activate_wait_cycle");

    for capacity in [64usize, 1024, 8192] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                let poll = PollInstance::with_capacity(capacity).unwrap();
                for handle in 0..64 {
                    poll.register(handle, EventSet::READABLE).unwrap();
                }

                b.iter(|| {
                    for handle in 0..64 {
                        poll.activate(black_box(handle), EventSet::READABLE);
                    }
                    poll.wait(capacity, None).unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_activate_dropped_at_capacity(c: &mut Criterion) {
    let poll = PollInstance::with_capacity(1).unwrap();
    poll.register(1, EventSet::READABLE).unwrap();
    poll.activate(1, EventSet::READABLE);

    // Queue stays full for the whole run: every activation is a drop
    c.bench_function("activate_dropped", |b| {
        b.iter(|| poll.activate(black_box(1), EventSet::READABLE));
    });
}

fn bench_wait_into_reused_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("wait_into");

    for fill in [16usize, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(fill), &fill, |b, &fill| {
            let poll = PollInstance::with_capacity(512).unwrap();
            poll.register(1, EventSet::READABLE).unwrap();
            let mut buf = vec![ReadyEvent::default(); 512];

            b.iter(|| {
                for _ in 0..fill {
                    poll.activate(1, EventSet::READABLE);
                }
                poll.wait_into(black_box(&mut buf), 512, None).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_activate_wait_cycle,
    bench_activate_dropped_at_capacity,
    bench_wait_into_reused_buffer
);
criterion_main!(benches);
