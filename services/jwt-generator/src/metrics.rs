//! Prometheus metrics for the JWT generator.
//!
//! Provides counters and a latency histogram, rendered in the text
//! exposition format for `GET /metrics`.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};
use std::time::Duration;

/// Tokens issued counter.
pub static TOKENS_ISSUED: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "jwt_generator_tokens_issued_total",
        "Total number of tokens issued",
        &["algorithm"]
    )
    .expect("Failed to register tokens_issued metric")
});

/// Generation failures counter, by error code.
pub static GENERATION_FAILURES: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "jwt_generator_failures_total",
        "Total number of failed token generations",
        &["code"]
    )
    .expect("Failed to register failures metric")
});

/// Signing latency histogram.
pub static SIGNING_LATENCY: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "jwt_generator_signing_latency_seconds",
        "Token signing latency in seconds",
        &["algorithm"],
        vec![0.000_05, 0.000_1, 0.000_5, 0.001, 0.005, 0.01, 0.05, 0.1]
    )
    .expect("Failed to register signing_latency metric")
});

/// Record a successfully issued token.
pub fn record_issued(algorithm: &str, elapsed: Duration) {
    TOKENS_ISSUED.with_label_values(&[algorithm]).inc();
    SIGNING_LATENCY
        .with_label_values(&[algorithm])
        .observe(elapsed.as_secs_f64());
}

/// Record a failed generation.
pub fn record_failure(code: &str) {
    GENERATION_FAILURES.with_label_values(&[code]).inc();
}

/// Render every registered metric in the Prometheus text format.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn render() -> Result<String, prometheus::Error> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
