//! File writer implementation

use crate::core::{derive_file_name, LogWriter, LoggerConfig, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// Writer for logging to a new file.
///
/// The target is either an explicit file path or a directory. In directory
/// mode the file name is derived at start time from the attaching logger's
/// configured start time (and this writer's optional id), so every logger
/// sharing a config lands on a predictable name. A log file that already
/// exists at the resolved path is a fatal configuration error and is never
/// overwritten.
///
/// Files created can be read by other processes while the logger is open;
/// output is buffered until flush or close.
///
/// # Examples
///
/// ```no_run
/// use easylog::writers::FileWriter;
///
/// // Explicit file path
/// let _ = FileWriter::new("./logs/run.log");
///
/// // Directory mode: name derived from the logger's start time
/// let _ = FileWriter::new("./logs/");
///
/// // Directory mode with an id: `{start_time}_worker.log`
/// let _ = FileWriter::with_id("./logs/", "worker");
/// ```
pub struct FileWriter {
    log_directory: PathBuf,
    log_name: Option<String>,
    id: Option<String>,
    writer: Option<BufWriter<File>>,
    closed: bool,
}

impl FileWriter {
    /// Create a file writer from a path that is either a file or a directory.
    ///
    /// A path with an extension is treated as an explicit file path; any
    /// other path is treated as a directory whose log name is derived at
    /// start time.
    #[must_use]
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        let log_path = log_path.into();

        let (log_directory, log_name) = if log_path.extension().is_some() {
            let name = log_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            let directory = log_path.parent().map(PathBuf::from).unwrap_or_default();
            (directory, name)
        } else {
            (log_path, None)
        };

        Self {
            log_directory,
            log_name,
            id: None,
            writer: None,
            closed: false,
        }
    }

    /// Create a directory-mode file writer with an id.
    ///
    /// The log name is derived from the logger's start time and `id` as
    /// `{start_time}_{id}.log`. The id is used verbatim.
    #[must_use]
    pub fn with_id(log_directory: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self {
            log_directory: log_directory.into(),
            log_name: None,
            id: Some(id.into()),
            writer: None,
            closed: false,
        }
    }

    fn create_log(&mut self, path: PathBuf) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    LoggerError::file_exists(path.to_string_lossy())
                } else {
                    LoggerError::io_operation(
                        format!("creating log file '{}'", path.display()),
                        e,
                    )
                }
            })?;

        self.writer = Some(BufWriter::new(file));
        Ok(())
    }
}

impl LogWriter for FileWriter {
    fn start_log(&mut self, config: &LoggerConfig) -> Result<()> {
        // Already started by another logger sharing this sink: never reopen
        // or truncate.
        if self.writer.is_some() {
            return Ok(());
        }

        let name = match &self.log_name {
            Some(name) => name.clone(),
            None => derive_file_name(&config.start_time, config.use_unix_time, self.id.as_deref()),
        };

        let path = self.log_directory.join(name);
        self.create_log(path)
    }

    fn log(&mut self, line: &str) -> bool {
        if self.closed {
            return false;
        }
        match self.writer.as_mut() {
            Some(writer) => writeln!(writer, "{}", line).is_ok(),
            None => false,
        }
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        if let Some(mut writer) = self.writer.take() {
            writer
                .flush()
                .map_err(|e| LoggerError::io_operation("closing log file", e))?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        // Ensure all buffered data reaches disk even without an explicit close
        let _ = self.flush();
    }
}
