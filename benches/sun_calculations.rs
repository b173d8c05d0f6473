use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hifitime::Epoch;

use sunpath::{get_position, get_times_default};

/// One instant per day over a full year, starting 2022-01-01T00:00:00 UTC.
fn year_of_instants() -> Vec<Epoch> {
    let start = 1_640_995_200_000.0;
    (0..365)
        .map(|day| Epoch::from_unix_milliseconds(start + day as f64 * 86_400_000.0))
        .collect()
}

fn bench_get_position(c: &mut Criterion) {
    let instants = year_of_instants();

    c.bench_function("get_position/year_of_days", |b| {
        b.iter(|| {
            get_position(
                black_box(instants.clone()),
                black_box(37.478897),
                black_box(126.953309),
            )
            .unwrap()
        })
    });
}

fn bench_get_times(c: &mut Criterion) {
    let instants = year_of_instants();

    c.bench_function("get_times/year_of_days", |b| {
        b.iter(|| {
            get_times_default(
                black_box(instants.clone()),
                black_box(37.478897),
                black_box(126.953309),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_get_position, bench_get_times);
criterion_main!(benches);
