//! Basic logger usage example
//!
//! Demonstrates named loggers sharing one live configuration, printf-style
//! templates and the two format-error policies.
//!
//! Run with: cargo run --example basic_usage

use tagged_logger::prelude::*;
use tagged_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Tagged Logger - Basic Usage Example ===\n");

    let config = LoggerConfig::builder()
        .level(Severity::Verbose)
        .emitter(ConsoleEmitter::new())
        .build();

    let net = Logger::new("net", config.clone());
    let db = Logger::new("db", config.clone());

    println!("1. Logging at different levels:");
    net.v("resolving %s", &args!["example.org"])?;
    net.d("socket buffer %d bytes", &args![65536])?;
    db.i("pool ready with %d connections", &args![8])?;
    db.w("slow query took %.1f s", &args![2.71])?;
    db.e("replica %s unreachable", &args!["db-2"])?;

    println!("\n2. Raising the shared threshold affects every logger:");
    config.set_level(Severity::Warning);
    net.i("hidden: below threshold", &[])?;
    warning!(net, "retry %d of %d", 3, 5)?;

    println!("\n3. Attaching an error:");
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer reset");
    net.e_with(&err, "stream to %s closed", &args!["10.0.0.7:443"])?;

    println!("\n4. Format-error policies:");
    config.set_level(Severity::Info);
    if let Err(e) = info!(db, "rows: %d", "many") {
        println!("   THROW reported: {}", e);
    }
    config.set_format_error_action(FormatErrorAction::AppendAsString);
    info!(db, "rows: %d", "many")?;

    println!("\n5. Dates:");
    info!(db, "snapshot taken at %tF %<tT", chrono::Utc::now())?;

    let stats = db.metrics();
    println!(
        "\n   db emitted={} filtered={} format_failures={}",
        stats.emitted(),
        stats.filtered(),
        stats.format_failures()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
