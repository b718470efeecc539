//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    line::build_line,
    log_level::LogLevel,
    writer::LogWriter,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Logger that fans formatted lines out to its writers.
///
/// Writers receive lines in registration order. A failing writer never stops
/// the remaining writers from being attempted; the per-call boolean result is
/// the AND over all writers. On drop the logger flushes and closes every
/// writer exactly once.
///
/// # Examples
///
/// ```
/// use easylog::core::{Logger, LoggerConfig};
/// use easylog::writers::ConsoleWriter;
///
/// let logger = Logger::new(
///     LoggerConfig::new().shared(),
///     vec![Box::new(ConsoleWriter::new())],
/// )
/// .expect("console writers start without error");
///
/// logger.info("application ready");
/// ```
pub struct Logger {
    config: Arc<LoggerConfig>,
    writers: Mutex<Vec<Box<dyn LogWriter>>>,
    closed: AtomicBool,
}

impl Logger {
    /// Create a logger and start every writer, in registration order.
    ///
    /// A writer failing to start aborts construction: writers started so far
    /// are closed best-effort and the error is returned, leaving no partial
    /// logger behind.
    pub fn new(config: Arc<LoggerConfig>, writers: Vec<Box<dyn LogWriter>>) -> Result<Self> {
        let mut writers = writers;

        for index in 0..writers.len() {
            if let Err(e) = writers[index].start_log(&config) {
                for writer in &mut writers[..index] {
                    let _ = writer.close();
                }
                return Err(e);
            }
        }

        Ok(Self {
            config,
            writers: Mutex::new(writers),
            closed: AtomicBool::new(false),
        })
    }

    /// The configuration this logger was built with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Log a message at `level`, capturing the call site automatically.
    ///
    /// Returns whether every writer logged the line; logging has failed if
    /// *any* of the writers failed to log.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) -> bool {
        let caller = Location::caller();
        self.log_at(level, message.as_ref(), caller.file(), caller.line())
    }

    /// Log a message with an explicitly supplied call site.
    ///
    /// The line is built once and dispatched to every writer in registration
    /// order; fan-out is never short-circuited by a failing writer.
    pub fn log_at(&self, level: LogLevel, message: &str, caller_file: &str, caller_line: u32) -> bool {
        if self.closed.load(Ordering::SeqCst) {
            return false;
        }

        let line = build_line(&self.config, level, message, caller_file, caller_line, Utc::now());

        let mut writers = self.writers.lock();
        let mut successful = true;
        for writer in writers.iter_mut() {
            successful &= writer.log(&line);
        }
        successful
    }

    /// Flush all writers, if applicable.
    ///
    /// Best effort: a writer failing to flush is reported on stderr and does
    /// not stop the remaining writers.
    pub fn flush(&self) {
        let mut writers = self.writers.lock();
        for writer in writers.iter_mut() {
            if let Err(e) = writer.flush() {
                eprintln!("[LOGGER ERROR] writer '{}' flush failed: {}", writer.name(), e);
            }
        }
    }

    /// Flush and close every writer exactly once, in registration order.
    ///
    /// Errors are collected so that every writer still gets its close
    /// attempt, and returned for the caller to inspect. Closing an already
    /// closed logger is a no-op returning no errors; after close, `log`
    /// returns `false`.
    pub fn close(&mut self) -> Vec<LoggerError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Vec::new();
        }

        let mut writers = std::mem::take(&mut *self.writers.lock());
        let mut errors = Vec::new();

        for writer in writers.iter_mut() {
            if let Err(e) = writer.flush() {
                errors.push(e);
            }
            if let Err(e) = writer.close() {
                errors.push(e);
            }
        }

        errors
    }

    /* ========== Shorthand methods for ease of use ========== */

    /// Log a message at the Trace level
    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl AsRef<str>) -> bool {
        let caller = Location::caller();
        self.log_at(LogLevel::Trace, message.as_ref(), caller.file(), caller.line())
    }

    /// Log a message at the Debug level
    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) -> bool {
        let caller = Location::caller();
        self.log_at(LogLevel::Debug, message.as_ref(), caller.file(), caller.line())
    }

    /// Log a message at the Verbose level
    #[inline]
    #[track_caller]
    pub fn verbose(&self, message: impl AsRef<str>) -> bool {
        let caller = Location::caller();
        self.log_at(LogLevel::Verbose, message.as_ref(), caller.file(), caller.line())
    }

    /// Log a message at the Info level
    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) -> bool {
        let caller = Location::caller();
        self.log_at(LogLevel::Info, message.as_ref(), caller.file(), caller.line())
    }

    /// Log a message at the Warn level
    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl AsRef<str>) -> bool {
        let caller = Location::caller();
        self.log_at(LogLevel::Warn, message.as_ref(), caller.file(), caller.line())
    }

    /// Log a message at the Error level
    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) -> bool {
        let caller = Location::caller();
        self.log_at(LogLevel::Error, message.as_ref(), caller.file(), caller.line())
    }

    /// Log a message at the Fatal level
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl AsRef<str>) -> bool {
        let caller = Location::caller();
        self.log_at(LogLevel::Fatal, message.as_ref(), caller.file(), caller.line())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        for e in self.close() {
            eprintln!("[LOGGER ERROR] writer shutdown failed: {}", e);
        }
    }
}
