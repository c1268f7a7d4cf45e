//! Performance benchmarks for the wage estimation engine.
//!
//! The whole pipeline is expected to complete in well under a second for
//! realistic schedules (tens of lines); these benchmarks track that headroom:
//! - Parsing a pasted schedule
//! - Per-day wage calculation
//! - End-to-end estimation through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;

use wage_engine::api::{AppState, create_router};
use wage_engine::calculation::{NoHolidays, estimate_schedule};
use wage_engine::config::WageRateTable;
use wage_engine::parser::parse_schedule_from;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Reference date keeping December dates in 2025 and January dates in 2026.
fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 20).unwrap()
}

/// Builds a schedule paste with the given number of shift lines, mixing
/// weekday and weekend shifts plus a header row and off-day rows.
fn build_schedule_text(shift_count: usize) -> String {
    let lines = [
        "12/15(月)\t17:00～20:00\t03:00\t00:00",
        "12/16(火)\t09:00～18:00\t08:00\t01:00",
        "12/17(水)\t13:00～17:00\t04:00\t00:00",
        "12/18(木)\t17:00～20:00\t03:00\t00:00",
        "12/20(土)\t13:00～17:30\t04:30\t00:00",
        "12/21(日)\t09:00～15:00\t06:00\t00:00",
    ];

    let mut text = String::from("日付\t勤務時間\t労働時間\t休憩時間\n");
    for i in 0..shift_count {
        text.push_str(lines[i % lines.len()]);
        text.push('\n');
        if i % 5 == 4 {
            text.push_str("12/19(金)\t－\t00:00\t00:00\n");
        }
    }
    text
}

fn bench_parse_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_schedule");

    for line_count in [10, 30, 100] {
        let text = build_schedule_text(line_count);
        group.throughput(Throughput::Elements(line_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(line_count),
            &text,
            |b, text| {
                b.iter(|| parse_schedule_from(black_box(text), reference_date()));
            },
        );
    }

    group.finish();
}

fn bench_estimate_schedule(c: &mut Criterion) {
    let rates = WageRateTable::default();
    let records = parse_schedule_from(&build_schedule_text(30), reference_date());
    assert!(!records.is_empty());

    c.bench_function("estimate_schedule_30_shifts", |b| {
        b.iter(|| estimate_schedule(black_box(&records), &NoHolidays, &rates).unwrap());
    });
}

fn bench_http_estimate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let body = serde_json::json!({
        "schedule_text": build_schedule_text(30),
        "reference_date": "2025-12-20"
    })
    .to_string();

    c.bench_function("http_estimate_30_shifts", |b| {
        b.to_async(&rt).iter(|| {
            let router = create_router(AppState::default());
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/estimate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        });
    });
}

criterion_group!(
    benches,
    bench_parse_schedule,
    bench_estimate_schedule,
    bench_http_estimate
);
criterion_main!(benches);
