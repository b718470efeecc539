//! # easylog
//!
//! A lightweight structured-logging library. Log lines are assembled from
//! configurable sections (level, timestamp, caller, message) and fanned out
//! to one or more pluggable sinks.
//!
//! ## Features
//!
//! - **Configurable Lines**: Level, wall-clock or delta timestamps, and call
//!   sites, with each section individually switchable
//! - **Multiple Writers**: Console, file, and custom sinks with per-call
//!   success aggregation
//! - **Deterministic Naming**: Directory-mode file sinks derive their name
//!   from the logger's start time
//! - **Easy to Use**: Simple and intuitive API

pub mod core;
pub mod factory;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        build_line, derive_file_name, format_delta, format_timestamp, LogLevel, LogWriter, Logger,
        LoggerConfig, LoggerError, Result, SECTION_SEPARATOR,
    };
    pub use crate::factory::FileLoggerFactory;
    pub use crate::writers::{ConsoleWriter, FileWriter, SharedWriter};
}

pub use crate::core::{
    build_line, derive_file_name, format_delta, format_timestamp, LogLevel, LogWriter, Logger,
    LoggerConfig, LoggerError, Result, SECTION_SEPARATOR,
};
pub use factory::FileLoggerFactory;
pub use writers::{ConsoleWriter, FileWriter, SharedWriter};
