//! Basic logger usage example
//!
//! Demonstrates console and files destinations, per-destination redaction,
//! categories and custom levels.
//!
//! Run with: cargo run --example basic_usage

use swiftwood::prelude::*;
use swiftwood::{error, info, log, verbose, warning};

fn main() -> Result<()> {
    println!("=== Swiftwood - Basic Usage Example ===\n");

    let log_folder = std::env::temp_dir().join("swiftwood-demo");

    let logger = Logger::builder()
        .destination(
            ConsoleDestination::new()
                .with_minimum_level(Level::VERBOSE)
                .with_max_chars_displayed(200),
        )
        .destination(FilesDestination::new(&log_folder, EncodingFormat::Json)?)
        .build_info_generator(|| Some(format!("{} (demo)", env!("CARGO_PKG_VERSION"))))
        .build();

    println!("1. Logging at different levels:");
    logger.very_verbose("Don't even worry");
    verbose!(logger, "Something small happened");
    logger.debug("Some minor update");
    info!(logger, "Look at me");
    warning!(logger, "uh oh");
    error!(logger, "Failed successfully");

    println!("\n2. Redaction (console shows the value, files censor it):");
    info!(logger, "login for", Censored("alice@example.com"));

    println!("\n3. Categories and context:");
    warning!(logger, category = Category::from("networking"), context = "retry 3/5"; "request timed out");

    println!("\n4. Custom level between info and warning:");
    log!(logger, Level::new("🔒 AUDIT", 70), "permissions changed");

    logger.flush()?;
    println!("\nEntries written to {}", log_folder.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
