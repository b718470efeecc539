//! Basic logger usage example
//!
//! Demonstrates console logging with the different line sections.
//!
//! Run with: cargo run --example basic_usage

use easylog::prelude::*;

fn main() -> Result<()> {
    println!("=== easylog - Basic Usage Example ===\n");

    // Default config: level and timestamp sections, console sink
    let logger = Logger::new(
        LoggerConfig::new().shared(),
        vec![Box::new(ConsoleWriter::new())],
    )?;

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.verbose("This is a verbose message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Delta timestamps with call sites:");

    let timed = Logger::new(
        LoggerConfig::new()
            .with_use_delta_time(true)
            .with_log_caller(true)
            .shared(),
        vec![Box::new(ConsoleWriter::new())],
    )?;

    timed.info("Logged relative to the logger's start time");
    std::thread::sleep(std::time::Duration::from_millis(250));
    timed.info("A quarter of a second later");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
