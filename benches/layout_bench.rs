// Benchmark for month layout
// Measures the full grid -> clip -> pack -> weeks pass at realistic event counts

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use month_grid_layout::{layout_month, Event, GridConfig};

fn generate_events(count: usize) -> Vec<Event> {
    let first = NaiveDate::from_ymd_opt(2025, 5, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    (0..count)
        .map(|i| {
            // Spread starts across the month and its neighbours, mixing short and long spans
            let start = first + Duration::days((i * 7 % 45) as i64 - 7) + Duration::hours((i % 9) as i64);
            let length = match i % 10 {
                0 => 12,
                1 | 2 => 3,
                _ => 0,
            };
            Event::new(
                format!("evt-{}", i),
                format!("Event {}", i),
                start,
                start + Duration::days(length) + Duration::hours(1),
            )
        })
        .collect()
}

fn bench_layout_month(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_month");
    let reference = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
    let config = GridConfig::default();

    for count in [10, 100, 500].iter() {
        let events = generate_events(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| layout_month(black_box(reference), black_box(events), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout_month);
criterion_main!(benches);
