/// Tool for habit statistics
///
/// This module implements the habit_stats MCP tool.

use serde::Serialize;
use crate::analytics::HabitStats;
use crate::domain::{Clock, HabitError};
use crate::service::HabitService;
use crate::storage::HabitStorage;
use crate::tools::{HabitIdParams, ToolResponse};

/// Response from checking habit statistics
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: HabitStats,
    pub message: String,
}

impl ToolResponse for StatsResponse {
    fn message(&self) -> &str {
        &self.message
    }
}

/// Get statistics for a habit using the provided service
pub fn get_habit_stats<S: HabitStorage, C: Clock>(
    service: &HabitService<S, C>,
    params: HabitIdParams,
) -> Result<StatsResponse, HabitError> {
    let stats = service.get_stats(params.habit_id)?;

    let recent = if stats.last_dates.is_empty() {
        "never".to_string()
    } else {
        stats
            .last_dates
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let message = format!(
        "{} (#{})\n   Current streak: {} days | Best: {} days | Rate: {:.2}%\n   Total marks: {} | Recent: {}",
        stats.name,
        stats.id,
        stats.current_streak,
        stats.max_streak,
        stats.success_rate,
        stats.total_marks,
        recent
    );

    Ok(StatsResponse { stats, message })
}
