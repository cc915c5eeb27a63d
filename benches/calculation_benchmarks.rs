//! Performance benchmarks for the levy reduction engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single calculation: < 100μs mean
//! - Batch of 100 calculations: < 100ms mean
//! - Batch of 1000 calculations: < 500ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use levy_engine::api::{AppState, create_router};
use levy_engine::config::PolicyLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded policy tables.
fn create_test_state() -> AppState {
    let policies = PolicyLoader::load("./config/levy").expect("Failed to load policy tables");
    AppState::new(policies)
}

/// Creates a calculation request body for a given employer size.
fn create_request_body(total_employees: u32, with_schedule: bool) -> String {
    let monthly_workers = if with_schedule {
        let months: Vec<serde_json::Value> = (0..12)
            .map(|i| {
                serde_json::json!({
                    "disabled_workers": 10 + (i % 3),
                    "severe_disabled_workers": 5
                })
            })
            .collect();
        serde_json::Value::Array(months)
    } else {
        serde_json::Value::Null
    };

    let request_json = serde_json::json!({
        "company_profile": {
            "employer_category": "private",
            "total_employees": total_employees,
            "disabled_employees": 10,
            "severe_disabled_employees": 3
        },
        "partner_contract": {
            "partner_annual_revenue": 300_000_000i64,
            "contract_amount": 30_000_000i64,
            "partner_disabled_workers": 10,
            "partner_severe_disabled_workers": 5,
            "monthly_workers": monthly_workers
        },
        "effective_year": 2025
    });

    serde_json::to_string(&request_json).expect("Failed to create request")
}

/// Benchmark: Single calculation.
///
/// Target: < 100μs mean
fn bench_single_calculation(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_body(500, false);

    c.bench_function("single_calculation", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Calculation with a full 12-month worker schedule.
fn bench_scheduled_calculation(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_body(500, true);

    c.bench_function("scheduled_calculation", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 calculations.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    // Pre-create 100 different requests (vary employer sizes for a realistic mix)
    let requests: Vec<String> = (0..100)
        .map(|i| create_request_body(100 + i * 37, i % 4 == 0))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Batch of 1000 calculations.
///
/// Target: < 500ms mean
fn bench_batch_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..1000)
        .map(|i| create_request_body(50 + i * 13, i % 5 == 0))
        .collect();

    let mut group = c.benchmark_group("large_batch_processing");
    group.throughput(Throughput::Elements(1000));
    // Reduce sample size for large batches to keep benchmark time reasonable
    group.sample_size(10);

    group.bench_function("batch_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(1000);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Various employer sizes to confirm size-independent scaling.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for total_employees in [100u32, 1_000, 10_000, 100_000].iter() {
        let router = create_router(state.clone());
        let body = create_request_body(*total_employees, false);

        group.bench_with_input(
            BenchmarkId::new("employees", total_employees),
            total_employees,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/calculate")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_scheduled_calculation,
    bench_batch_100,
    bench_batch_1000,
    bench_scaling,
);
criterion_main!(benches);
