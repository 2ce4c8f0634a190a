/// Habit tools exposed to MCP clients
///
/// Each tool takes a typed parameter struct, calls the habit service and
/// returns a serializable response with a human-readable message. Tools add
/// no validation: errors come straight from the service.

pub mod create;
pub mod delete;
pub mod list;
pub mod log;
pub mod status;
pub mod update;

// Re-export tool functions for easy access
pub use create::*;
pub use delete::*;
pub use list::*;
pub use log::*;
pub use status::*;
pub use update::*;

use serde::{Deserialize, Serialize};
use crate::domain::HabitId;

/// A tool response: structured data plus text for the client to show
pub trait ToolResponse: Serialize {
    fn message(&self) -> &str;
}

/// Parameters for tools that act on a single habit
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HabitIdParams {
    pub habit_id: HabitId,
}
