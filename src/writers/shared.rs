//! Shared writer handle for multi-logger sinks

use crate::core::{LogWriter, LoggerConfig, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// A cheaply cloneable handle that lets several loggers feed one sink.
///
/// Loggers own their writers exclusively, so sharing a sink means handing
/// each logger a clone of this handle instead of the sink itself. Calls are
/// serialized through a mutex, which keeps interleaved lines intact when
/// loggers run on different threads.
///
/// Closing through any handle closes the sink for every logger sharing it;
/// subsequent writes through other handles fail gracefully. Whether that
/// trade-off is acceptable is the caller's decision.
///
/// # Examples
///
/// ```no_run
/// use easylog::core::{Logger, LoggerConfig};
/// use easylog::writers::{FileWriter, SharedWriter};
///
/// let sink = SharedWriter::new(FileWriter::new("./logs/"));
/// let config = LoggerConfig::new().shared();
///
/// let first = Logger::new(config.clone(), vec![Box::new(sink.clone())]).unwrap();
/// let second = Logger::new(config, vec![Box::new(sink)]).unwrap();
/// ```
#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<Box<dyn LogWriter>>>,
}

impl SharedWriter {
    /// Wrap a writer for sharing across loggers
    #[must_use]
    pub fn new(writer: impl LogWriter + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }
}

impl LogWriter for SharedWriter {
    fn start_log(&mut self, config: &LoggerConfig) -> Result<()> {
        self.inner.lock().start_log(config)
    }

    fn log(&mut self, line: &str) -> bool {
        self.inner.lock().log(line)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.lock().flush()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.lock().close()
    }

    fn name(&self) -> &str {
        "shared"
    }
}
