/// Tool for renaming existing habits
///
/// This module implements the habit_rename MCP tool.

use serde::{Deserialize, Serialize};
use crate::domain::{Clock, HabitError, HabitId};
use crate::service::{HabitService, HabitView};
use crate::storage::HabitStorage;
use crate::tools::ToolResponse;

/// Parameters for renaming a habit
#[derive(Debug, Deserialize)]
pub struct RenameHabitParams {
    pub habit_id: HabitId,
    pub name: String,
}

/// Response from renaming a habit
#[derive(Debug, Serialize)]
pub struct UpdateHabitResponse {
    pub habit: HabitView,
    pub message: String,
}

impl ToolResponse for UpdateHabitResponse {
    fn message(&self) -> &str {
        &self.message
    }
}

/// Rename a habit using the provided service
pub fn rename_habit<S: HabitStorage, C: Clock>(
    service: &HabitService<S, C>,
    params: RenameHabitParams,
) -> Result<UpdateHabitResponse, HabitError> {
    let habit = service.rename_habit(params.habit_id, &params.name)?;

    Ok(UpdateHabitResponse {
        message: format!("Updated habit {}: now '{}'", habit.id, habit.name),
        habit,
    })
}
