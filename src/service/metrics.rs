use dioxus_logger::tracing;

use crate::model::command::CommandRecord;

/// Latency recorded for an invocation that failed.
pub const FAILED_LATENCY: i64 = -1;

/// Sink for per-command latency measurements.
pub trait Metrics: Send + Sync {
    /// Records one finished invocation; `latency` is in milliseconds or
    /// `FAILED_LATENCY`.
    fn write_command(&self, record: &CommandRecord, latency: i64);
}

/// Emits command measurements as structured log events under the `metrics`
/// target.
pub struct LogMetrics;

impl Metrics for LogMetrics {
    fn write_command(&self, record: &CommandRecord, latency: i64) {
        tracing::info!(
            target: "metrics",
            command = %record.command,
            guild = ?record.guild,
            channel = record.channel,
            gateway_ping = ?record.gateway_ping,
            latency,
            "command completed"
        );
    }
}
