// Non-blocking Logger

/*
 * FORMAT BENCH - NON-BLOCKING LOGGER
 * =================================================================
 * Component Name: engine/src/utils/logger.rs
 * Core Responsibility: تسجيل أحداث القياس دون تعطيل المسار المقاس.
 * Design Pattern: Async Appender
 * Note: stdout belongs to the report; log lines go to the file and stderr.
 * =================================================================
 */

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::formats::Format;
use crate::utils::config_loader::LogConfig;

/// تهيئة نظام التسجيل العالمي.
/// يجب استدعاء هذه الدالة مرة واحدة فقط في `main.rs`.
/// The returned `WorkerGuard` must stay alive until the program exits.
pub fn init_logger(cfg: &LogConfig) -> WorkerGuard {
    // أ. الكتابة الدورية للملفات (Rolling File Appender)
    let file_appender = tracing_appender::rolling::daily(&cfg.dir, &cfg.file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .compact();

    let console_layer = cfg.console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    // ب. الفلتر: RUST_LOG أولاً، ثم المستوى المضبوط
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("LOGGER: Initialized non-blocking logging system at {}/{}", cfg.dir, cfg.file_name);

    guard
}

// =================================================================
// وحدات مساعدة للتسجيل المهيكل (Structured Logging Helpers)
// =================================================================

pub fn log_encoded(format: Format, size_bytes: usize, elapsed_ms: f64) {
    tracing::info!(
        target: "BENCH_AUDIT",
        format = %format,
        size_bytes = size_bytes,
        elapsed_ms = elapsed_ms,
        "ENCODED"
    );
}

pub fn log_decoded(format: Format, records: usize, elapsed_ms: f64) {
    tracing::info!(
        target: "BENCH_AUDIT",
        format = %format,
        records = records,
        elapsed_ms = elapsed_ms,
        "DECODED"
    );
}
