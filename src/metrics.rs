//! Prometheus metrics collection for robogate.
//!
//! Exposed on a separate HTTP listener (see [`crate::http`]).
//!
//! - `robogate_command_total{scope,command}` - Commands invoked
//! - `robogate_command_duration_seconds{scope}` - Command latency histogram
//! - `robogate_command_errors_total{scope,kind}` - Unknown or failed commands
//! - `robogate_api_errors_total{kind}` - Not-found, malformed path and auth rejections
//! - `robogate_robots` - Robots registered at startup

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use std::sync::OnceLock;

/// Global Prometheus registry for all metrics.
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Commands invoked by scope and name.
pub static COMMAND_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();

/// Command latency by scope.
pub static COMMAND_LATENCY: OnceLock<HistogramVec> = OnceLock::new();

/// Command errors by scope and kind.
pub static COMMAND_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();

/// Request-level errors by kind.
pub static API_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();

/// Robots registered at startup.
pub static ROBOTS: OnceLock<IntGauge> = OnceLock::new();

/// Initialize the Prometheus metrics registry.
///
/// Must be called once at startup before any metrics are recorded;
/// recording before `init()` is a no-op.
pub fn init() {
    let r = registry();

    macro_rules! register {
        ($metric:ident, $init:expr) => {
            let m = $init.expect(concat!(stringify!($metric), " creation failed"));
            if let Err(e) = r.register(Box::new(m.clone())) {
                tracing::warn!(error = %e, concat!("Failed to register metric ", stringify!($metric)));
            }
            let _ = $metric.set(m);
        };
    }

    register!(COMMAND_COUNTER, IntCounterVec::new(Opts::new("robogate_command_total", "Commands invoked by scope and name"), &["scope", "command"]));
    register!(COMMAND_LATENCY, HistogramVec::new(
        HistogramOpts::new("robogate_command_duration_seconds", "Command latency by scope")
            .buckets(vec![0.0001, 0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 30.0]),
        &["scope"]));
    register!(COMMAND_ERRORS, IntCounterVec::new(Opts::new("robogate_command_errors_total", "Command errors by scope and kind"), &["scope", "kind"]));
    register!(API_ERRORS, IntCounterVec::new(Opts::new("robogate_api_errors_total", "Request errors by kind"), &["kind"]));
    register!(ROBOTS, IntGauge::new("robogate_robots", "Robots registered at startup"));
}

/// Gather all metrics and encode them in Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry().gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode Prometheus metrics");
        return String::new();
    }
    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Prometheus metrics were not valid UTF-8");
            String::new()
        }
    }
}

/// Record a command execution with latency.
#[inline]
pub fn record_command(scope: &str, command: &str, duration_secs: f64) {
    if let Some(c) = COMMAND_COUNTER.get() {
        c.with_label_values(&[scope, command]).inc();
    }
    if let Some(h) = COMMAND_LATENCY.get() {
        h.with_label_values(&[scope]).observe(duration_secs);
    }
}

/// Record a command error (`unknown_command`, `failed`, `panicked`).
#[inline]
pub fn record_command_error(scope: &str, kind: &str) {
    if let Some(c) = COMMAND_ERRORS.get() {
        c.with_label_values(&[scope, kind]).inc();
    }
}

/// Record a request-level error.
#[inline]
pub fn record_api_error(kind: &str) {
    if let Some(c) = API_ERRORS.get() {
        c.with_label_values(&[kind]).inc();
    }
}

/// Set the registered robot gauge.
#[inline]
pub fn set_robots(count: usize) {
    if let Some(g) = ROBOTS.get() {
        g.set(i64::try_from(count).unwrap_or(i64::MAX));
    }
}
