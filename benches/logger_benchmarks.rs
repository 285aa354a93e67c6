//! Criterion benchmarks for tagged_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::error::Error;
use std::sync::Arc;
use tagged_logger::prelude::*;
use tagged_logger::sprintf;

/// Emitter that discards everything
struct NullEmitter;

impl Emitter for NullEmitter {
    fn emit(
        &self,
        level: Severity,
        message: &str,
        _error: Option<&(dyn Error + 'static)>,
    ) -> tagged_logger::Result<()> {
        black_box((level, message));
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn null_logger(level: Severity, action: FormatErrorAction) -> Logger {
    let config = LoggerConfig::builder()
        .level(level)
        .emitter(NullEmitter)
        .format_error_action(action)
        .build();
    Logger::new("bench", config)
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let filtered = null_logger(Severity::Error, FormatErrorAction::Throw);
    group.bench_function("filtered", |b| {
        b.iter(|| filtered.d(black_box("value %d"), &args![42]));
    });

    let logger = null_logger(Severity::Verbose, FormatErrorAction::Throw);
    group.bench_function("plain", |b| {
        b.iter(|| logger.i(black_box("Info message"), &[]));
    });

    group.bench_function("tagged", |b| {
        b.iter(|| logger.w(black_box("Warning message"), &[]));
    });

    group.bench_function("formatted", |b| {
        b.iter(|| {
            logger.i(
                black_box("user %s logged in from %s after %d ms"),
                &args!["alice", "10.0.0.1", 37],
            )
        });
    });

    let lenient = null_logger(Severity::Verbose, FormatErrorAction::AppendAsString);
    group.bench_function("append_fallback", |b| {
        b.iter(|| lenient.i(black_box("%d items"), &args!["many"]));
    });

    group.finish();
}

// ============================================================================
// Emitter Fan-out Benchmarks
// ============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for count in [1usize, 4, 16] {
        let config = LoggerConfig::builder().level(Severity::Verbose).build();
        for _ in 0..count {
            config.add_emitter(Arc::new(NullEmitter));
        }
        let logger = Logger::new("fan", config);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &logger, |b, logger| {
            b.iter(|| logger.i(black_box("n=%d"), &args![7]));
        });
    }

    group.finish();
}

// ============================================================================
// Template Engine Benchmarks
// ============================================================================

fn bench_printf(c: &mut Criterion) {
    let mut group = c.benchmark_group("printf");
    group.throughput(Throughput::Elements(1));

    group.bench_function("integers", |b| {
        b.iter(|| sprintf(black_box("%d %5d %-5d %,d"), &args![1, 22, 333, 4_444_444]));
    });

    group.bench_function("floats", |b| {
        b.iter(|| sprintf(black_box("%.2f %e %g"), &args![3.14159, 0.000123, 1e10]));
    });

    group.bench_function("hex", |b| {
        b.iter(|| sprintf(black_box("%x %#X %08o"), &args![255, 48879, 8]));
    });

    group.bench_function("long_message", |b| {
        let payload = "y".repeat(4096);
        b.iter(|| sprintf(black_box("payload: %s"), &args![payload.as_str()]));
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_fan_out, bench_printf);
criterion_main!(benches);
