//! Console writer implementation

use crate::core::{LogWriter, LoggerConfig, Result};
use std::io::{self, Write};

enum ConsoleTarget {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    Custom(Box<dyn Write + Send>),
}

impl ConsoleTarget {
    fn as_write(&mut self) -> &mut dyn Write {
        match self {
            ConsoleTarget::Stdout(stream) => stream,
            ConsoleTarget::Stderr(stream) => stream,
            ConsoleTarget::Custom(stream) => stream.as_mut(),
        }
    }
}

/// Writer for logging to a console stream.
///
/// Defaults to the standard output stream. Starting is a no-op, so one
/// instance can be started by any number of loggers. Closing flushes and
/// disables the writer; the process-wide std streams themselves are never
/// closed, while a caller-supplied stream is dropped.
///
/// # Examples
///
/// ```
/// use easylog::writers::ConsoleWriter;
///
/// // Standard output (default)
/// let _ = ConsoleWriter::new();
///
/// // Standard error
/// let _ = ConsoleWriter::stderr();
/// ```
pub struct ConsoleWriter {
    target: ConsoleTarget,
    closed: bool,
}

impl ConsoleWriter {
    /// Create a writer targeting the standard output stream
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: ConsoleTarget::Stdout(io::stdout()),
            closed: false,
        }
    }

    /// Create a writer targeting the standard error stream
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr(io::stderr()),
            closed: false,
        }
    }

    /// Create a writer targeting an arbitrary stream
    #[must_use]
    pub fn with_stream(stream: Box<dyn Write + Send>) -> Self {
        Self {
            target: ConsoleTarget::Custom(stream),
            closed: false,
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for ConsoleWriter {
    fn start_log(&mut self, _config: &LoggerConfig) -> Result<()> {
        Ok(())
    }

    fn log(&mut self, line: &str) -> bool {
        if self.closed {
            return false;
        }
        writeln!(self.target.as_write(), "{}", line).is_ok()
    }

    fn flush(&mut self) -> Result<()> {
        self.target.as_write().flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let result = self.target.as_write().flush();
        if let ConsoleTarget::Custom(_) = self.target {
            self.target = ConsoleTarget::Stdout(io::stdout());
        }
        result.map_err(|e| crate::core::LoggerError::io_operation("closing console stream", e))
    }

    fn name(&self) -> &str {
        "console"
    }
}
