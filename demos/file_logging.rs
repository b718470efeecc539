//! File logging example
//!
//! Demonstrates fanning one logger out to console and file sinks, and
//! deriving per-run file names through the factory.
//!
//! Run with: cargo run --example file_logging

use easylog::prelude::*;

fn main() -> Result<()> {
    println!("=== easylog - File Logging Example ===\n");

    std::fs::create_dir_all("./logs")?;

    // One logger, two sinks: every line lands on the console and in the
    // start-time-named log file.
    let logger = Logger::new(
        LoggerConfig::new().shared(),
        vec![
            Box::new(ConsoleWriter::new()),
            Box::new(FileWriter::new("./logs/")),
        ],
    )?;

    println!("1. Logging to both console and file:");

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");

    for i in 1..=5 {
        easylog::info!(logger, "Processing item {}/5", i);
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");
    logger.flush();

    println!("\n2. Factory-created loggers sharing one start time:");

    let factory = FileLoggerFactory::new("./logs/", LoggerConfig::new());
    let network = factory.create(Some("network"))?;
    let storage = factory.create(Some("storage"))?;

    network.info("listening on 0.0.0.0:8080");
    storage.info("opened volume /var/data");

    println!("\n=== Example completed successfully! ===");
    println!("Check './logs/' for the generated log files");

    Ok(())
}
