//! Factories for building many loggers from one configuration

use crate::core::{Logger, LoggerConfig, LogWriter, Result};
use crate::writers::{FileWriter, SharedWriter};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A factory that creates loggers sharing one config but writing to
/// differently-id'd files in a common directory.
///
/// Because every created logger shares the factory's config, they all share
/// one `start_time`, so a whole run's log files carry the same timestamp
/// prefix and differ only by id.
///
/// # Examples
///
/// ```no_run
/// use easylog::core::LoggerConfig;
/// use easylog::factory::FileLoggerFactory;
///
/// let factory = FileLoggerFactory::new("./logs/", LoggerConfig::new());
///
/// let network = factory.create(Some("network")).unwrap();
/// let storage = factory.create(Some("storage")).unwrap();
/// ```
pub struct FileLoggerFactory {
    log_directory: PathBuf,
    config: Arc<LoggerConfig>,
    extra_writers: Vec<SharedWriter>,
}

impl FileLoggerFactory {
    /// Create a factory writing to `log_directory` with `config`
    #[must_use]
    pub fn new(log_directory: impl Into<PathBuf>, config: LoggerConfig) -> Self {
        Self {
            log_directory: log_directory.into(),
            config: Arc::new(config),
            extra_writers: Vec::new(),
        }
    }

    /// Attach an extra writer that every created logger will also log to.
    ///
    /// All created loggers share the same extra writers, so the sink must be
    /// share-tolerant, which [`SharedWriter`] guarantees.
    #[must_use]
    pub fn with_extra_writer(mut self, writer: SharedWriter) -> Self {
        self.extra_writers.push(writer);
        self
    }

    /// Create a logger with a directory-mode file writer using `id`.
    ///
    /// `id` must be unique per factory directory; a collision surfaces as a
    /// file-exists error. When `id` is `None` the caller file's name without
    /// its extension is used.
    #[track_caller]
    pub fn create(&self, id: Option<&str>) -> Result<Logger> {
        let id = match id {
            Some(id) => id.to_string(),
            None => caller_stem(Location::caller().file()),
        };

        let mut writers: Vec<Box<dyn LogWriter>> =
            vec![Box::new(FileWriter::with_id(&self.log_directory, id))];
        writers.extend(
            self.extra_writers
                .iter()
                .map(|writer| Box::new(writer.clone()) as Box<dyn LogWriter>),
        );

        Logger::new(Arc::clone(&self.config), writers)
    }

    /// Create a factory with the same shared config but a different directory
    #[must_use]
    pub fn clone_with_directory(&self, log_directory: impl Into<PathBuf>) -> Self {
        Self {
            log_directory: log_directory.into(),
            config: Arc::clone(&self.config),
            extra_writers: self.extra_writers.clone(),
        }
    }
}

/// File name of a caller path without its extension
fn caller_stem(caller_file: &str) -> String {
    Path::new(caller_file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| caller_file.to_string())
}
