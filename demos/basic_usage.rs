//! Basic logger usage example
//!
//! Demonstrates synchronous logging to the console with different thresholds
//! and a custom template.
//!
//! Run with: cargo run --example basic_usage

use module_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Module Logger - Basic Usage Example ===\n");

    // Defaults: module GLOBAL, threshold INFO, stdout
    let logger = Logger::new();

    println!("1. Default logger (INFO threshold):");
    logger.error("This is an error message")?;
    logger.warn("This is a warning message")?;
    logger.info("This is an info message")?;
    logger.debug("Debug message (hidden)")?;
    logger.trace("Trace message (hidden)")?;

    println!("\n2. Module logger with TRACE threshold:");
    let logger = Logger::builder()
        .module_name("DEMO")
        .min_level(LogLevel::Trace)
        .build();
    logger.debug("This is a debug message")?;
    logger.trace("This is a trace message")?;

    println!("\n3. Custom template on stderr:");
    let logger = create_logger(
        "CUSTOM",
        LogLevel::Info,
        "$formattedTimestamp $logLevel [$moduleName] $message",
        ConsoleSink::stderr(),
    );
    logger.info("Custom layout")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
