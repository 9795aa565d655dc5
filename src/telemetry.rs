//! Telemetry utilities for command timing and tracing spans.

use std::time::Instant;

/// Guard for timing command execution and recording metrics.
///
/// Records command latency when dropped.
pub struct CommandTimer {
    scope: &'static str,
    command: String,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(scope: &'static str, command: impl Into<String>) -> Self {
        Self {
            scope,
            command: command.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        crate::metrics::record_command(self.scope, &self.command, duration);
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Level, Span, span};

    /// Create a span for one command invocation.
    pub fn command(scope: &str, robot: Option<&str>, device: Option<&str>, command: &str) -> Span {
        span!(
            Level::DEBUG,
            "robogate.command",
            scope = %scope,
            robot = robot,
            device = device,
            command = %command,
        )
    }
}
