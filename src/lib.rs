/// Public library interface for the Habit Tracker
///
/// This module exports the habit service, its store and calculators, and the
/// server that exposes them as MCP tools over JSON-RPC.

use chrono::NaiveDate;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite};

// Internal modules
mod domain;
mod storage;
mod analytics;
mod service;
mod tools;
mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use storage::{HabitStorage, HabitStore, DEFAULT_ID_SEED};
pub use analytics::{HabitStats, StatsEngine, RECENT_MARKS_LIMIT};
pub use service::{HabitService, HabitView, MarkResult};

/// Habit service as wired by the server: in-memory store, injected clock
pub type AppService = HabitService<HabitStore, Box<dyn Clock>>;

/// Errors that can stop the server
///
/// Habit errors never reach this level: they become tool error results.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Startup settings for the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// First id the store allocates
    pub id_seed: u64,
    /// Pin "today" to this date instead of the system clock
    pub today: Option<NaiveDate>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            id_seed: DEFAULT_ID_SEED,
            today: None,
        }
    }
}

/// Main habit tracker server that implements the MCP protocol
///
/// Habits live in memory for the lifetime of the process.
pub struct HabitTrackerServer {
    service: AppService,
}

impl HabitTrackerServer {
    /// Create a server from startup settings
    pub fn new(config: ServerConfig) -> Self {
        let clock: Box<dyn Clock> = match config.today {
            Some(today) => {
                tracing::info!("Using fixed clock: today is {}", today);
                Box::new(FixedClock::new(today))
            }
            None => Box::new(SystemClock),
        };

        Self::with_clock(config.id_seed, clock)
    }

    /// Create a server with an explicit clock
    pub fn with_clock(id_seed: u64, clock: Box<dyn Clock>) -> Self {
        tracing::info!("Initializing Habit Tracker server (first id {})", id_seed);

        Self {
            service: HabitService::new(HabitStore::with_seed(id_seed), clock),
        }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin is closed or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve newline-delimited JSON-RPC from any reader/writer pair
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.serve(reader, writer).await
    }

    /// Get a reference to the habit service (useful for testing)
    pub fn service(&self) -> &AppService {
        &self.service
    }
}
