/// Main entry point for the Habit Tracker MCP server
///
/// This file sets up logging, parses command line arguments, and starts the MCP server.
/// The server listens for JSON-RPC requests over stdin/stdout following the MCP protocol.

use chrono::NaiveDate;
use clap::Parser;
use tracing::info;

use habit_tracker_core::{HabitTrackerServer, ServerConfig, DEFAULT_ID_SEED};

/// Command line arguments for the Habit Tracker MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First id handed out to a new habit
    #[arg(long, default_value_t = DEFAULT_ID_SEED)]
    id_seed: u64,

    /// Pin "today" to a fixed date (YYYY-MM-DD) instead of the system clock
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker_core={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting Habit Tracker MCP server");

    let server = HabitTrackerServer::new(ServerConfig {
        id_seed: args.id_seed,
        today: args.today,
    });

    // Run the MCP server - this will handle JSON-RPC communication over stdin/stdout
    server.run().await?;

    info!("Habit Tracker MCP server shutdown complete");
    Ok(())
}
