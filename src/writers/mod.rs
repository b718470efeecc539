//! Writer implementations

pub mod console;
pub mod file;
pub mod shared;

pub use console::ConsoleWriter;
pub use file::FileWriter;
pub use shared::SharedWriter;

// Re-export the trait for convenience
pub use crate::core::LogWriter;
