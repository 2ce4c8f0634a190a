/// Tool for creating new habits
///
/// This module implements the habit_create MCP tool.

use serde::{Deserialize, Serialize};
use crate::domain::{Clock, HabitError};
use crate::service::{HabitService, HabitView};
use crate::storage::HabitStorage;
use crate::tools::ToolResponse;

/// Parameters for creating a new habit
#[derive(Debug, Deserialize)]
pub struct CreateHabitParams {
    /// Raw name as typed by the user; trimmed by the store
    pub name: String,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub habit: HabitView,
    pub message: String,
}

impl ToolResponse for CreateHabitResponse {
    fn message(&self) -> &str {
        &self.message
    }
}

/// Create a new habit using the provided service
pub fn create_habit<S: HabitStorage, C: Clock>(
    service: &HabitService<S, C>,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, HabitError> {
    let habit = service.create_habit(&params.name)?;

    Ok(CreateHabitResponse {
        message: format!("Created habit '{}' (id {}). Ready to start your streak!", habit.name, habit.id),
        habit,
    })
}
