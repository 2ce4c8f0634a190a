/// Tool for deleting habits
///
/// This module implements the habit_delete MCP tool. Deletion is permanent.

use serde::Serialize;
use crate::domain::{Clock, HabitError, HabitId};
use crate::service::HabitService;
use crate::storage::HabitStorage;
use crate::tools::{HabitIdParams, ToolResponse};

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub habit_id: HabitId,
    pub message: String,
}

impl ToolResponse for DeleteHabitResponse {
    fn message(&self) -> &str {
        &self.message
    }
}

/// Delete a habit using the provided service
pub fn delete_habit<S: HabitStorage, C: Clock>(
    service: &HabitService<S, C>,
    params: HabitIdParams,
) -> Result<DeleteHabitResponse, HabitError> {
    service.delete_habit(params.habit_id)?;

    Ok(DeleteHabitResponse {
        habit_id: params.habit_id,
        message: format!("Deleted habit {}", params.habit_id),
    })
}
