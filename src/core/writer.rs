//! Writer trait for log output destinations

use super::{config::LoggerConfig, error::Result};

/// A log output sink.
///
/// Lifecycle: [`start_log`](LogWriter::start_log) once per attaching logger,
/// zero or more [`log`](LogWriter::log) calls, [`flush`](LogWriter::flush)
/// any number of times, then [`close`](LogWriter::close).
///
/// Per-write failures are reported through the boolean return of `log` rather
/// than an error: the logger, not the sink, decides how to aggregate
/// failures across multiple sinks.
pub trait LogWriter: Send {
    /// Prepare the sink for writing.
    ///
    /// Receives the attaching logger's configuration; file sinks in directory
    /// mode derive their file name from its `start_time` here. May be called
    /// again by another logger sharing the sink; implementations must
    /// tolerate that without reopening or truncating.
    fn start_log(&mut self, config: &LoggerConfig) -> Result<()>;

    /// Append `line` plus a line terminator to the sink.
    ///
    /// Returns `false` on a non-fatal write failure or after the sink is
    /// closed; never panics the caller.
    fn log(&mut self, line: &str) -> bool;

    /// Force buffered output to be visible. Safe to call any number of
    /// times, including before any `log`.
    fn flush(&mut self) -> Result<()>;

    /// Release underlying resources. Idempotent; after close, `log` returns
    /// `false`.
    fn close(&mut self) -> Result<()>;

    /// Sink name used in diagnostics
    fn name(&self) -> &str;
}
