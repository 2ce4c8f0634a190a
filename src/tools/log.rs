/// Tool for marking a habit as done today
///
/// This module implements the habit_mark MCP tool. The day always comes from
/// the server clock; clients can't backfill marks.

use serde::Serialize;
use crate::domain::{streak_message, Clock, HabitError};
use crate::service::{HabitService, MarkResult};
use crate::storage::HabitStorage;
use crate::tools::{HabitIdParams, ToolResponse};

/// Response from marking a habit
#[derive(Debug, Serialize)]
pub struct MarkHabitResponse {
    #[serde(flatten)]
    pub result: MarkResult,
    pub message: String,
}

impl ToolResponse for MarkHabitResponse {
    fn message(&self) -> &str {
        &self.message
    }
}

/// Mark a habit for today using the provided service
pub fn mark_habit<S: HabitStorage, C: Clock>(
    service: &HabitService<S, C>,
    params: HabitIdParams,
) -> Result<MarkHabitResponse, HabitError> {
    let result = service.mark_today(params.habit_id)?;
    let streak = result.habit.current_streak;

    Ok(MarkHabitResponse {
        message: format!(
            "Marked '{}' for {}. Current streak: {} day{}. {}",
            result.habit.name,
            result.last_marked_at,
            streak,
            if streak == 1 { "" } else { "s" },
            streak_message(streak)
        ),
        result,
    })
}
