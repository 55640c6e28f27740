//! Criterion benchmarks for module_logger

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use module_logger::prelude::*;
use std::sync::Arc;

fn discard(_line: &str) -> Result<()> {
    Ok(())
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new_default", |b| {
        b.iter(|| {
            let logger = Logger::new();
            black_box(logger)
        });
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .module_name(black_box("BENCH"))
                .min_level(LogLevel::Debug)
                .sink(discard)
                .build();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .min_level(LogLevel::Trace)
        .sink(discard)
        .build();

    group.bench_function("error", |b| {
        b.iter(|| logger.error(black_box("Error message")));
    });

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("trace", |b| {
        b.iter(|| logger.trace(black_box("Trace message")));
    });

    group.finish();
}

fn bench_async_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("async_logging");
    group.throughput(Throughput::Elements(1));

    let logger = AsyncLogger::builder(Blocking::new(discard))
        .min_level(LogLevel::Info)
        .build_async();

    group.bench_function("emitted", |b| {
        b.iter(|| tokio_test::block_on(logger.info(black_box("Info message"))));
    });

    group.bench_function("suppressed", |b| {
        b.iter(|| tokio_test::block_on(logger.debug(black_box("Debug message"))));
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    group.throughput(Throughput::Elements(400));

    let logger = Arc::new(Logger::builder().sink(discard).build());

    group.bench_function("4_threads_x_100", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for _ in 0..100 {
                            let _ = logger.info("concurrent message");
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("benchmark thread panicked");
            }
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let config = LoggerConfig::new("BENCH", LogLevel::Info, DEFAULT_FORMAT);
    let timestamp = Utc::now();

    group.bench_function("render_default_template", |b| {
        b.iter(|| config.render(LogLevel::Info, black_box("hello world"), &timestamp));
    });

    let params: FormatParams = vec![("a", "1"), ("b", "2"), ("message", "payload")]
        .into_iter()
        .collect();

    group.bench_function("format_string", |b| {
        b.iter(|| format_string(black_box("$a-$b-$c: $message"), &params));
    });

    group.finish();
}

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .min_level(LogLevel::Warn)
        .sink(discard)
        .build();

    group.bench_function("below_threshold", |b| {
        b.iter(|| logger.debug(black_box("This should be filtered")));
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| logger.error(black_box("This should be logged")));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_sync_logging,
    bench_async_logging,
    bench_concurrent_logging,
    bench_formatting,
    bench_level_filtering
);

criterion_main!(benches);
