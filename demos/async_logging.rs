//! Async logging example
//!
//! Demonstrates an async sink, concurrent log calls from several tasks and
//! observing a delivery failure.
//!
//! Run with: cargo run --example async_logging

use module_logger::prelude::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Module Logger - Async Logging Example ===\n");

    // Simulated remote sink with some latency
    let sink = from_async_fn(|line: String| async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        println!("   remote <- {}", line);
        Ok::<(), LoggerError>(())
    });

    let logger = Arc::new(
        AsyncLogger::builder(sink)
            .module_name("WORKER")
            .min_level(LogLevel::Debug)
            .build_async(),
    );

    println!("1. Concurrent logging from 5 tasks:");
    let mut handles = vec![];
    for task_id in 0..5 {
        let logger = Arc::clone(&logger);
        handles.push(tokio::spawn(async move {
            for i in 0..3 {
                logger.info(format!("Task {} - Message {}", task_id, i)).await?;
            }
            Ok::<(), LoggerError>(())
        }));
    }
    for handle in handles {
        handle.await.map_err(|e| LoggerError::other(e.to_string()))??;
    }

    println!("\n2. Suppressed call completes immediately:");
    logger.trace("never delivered").await?;
    println!("   trace call resolved without touching the sink");

    println!("\n3. Delivery failure surfaces to the caller:");
    let failing = AsyncLogger::new(from_async_fn(|_line: String| async move {
        Err::<(), LoggerError>(LoggerError::sink("remote", "connection refused"))
    }));
    if let Err(e) = failing.error("lost").await {
        println!("   caught: {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
