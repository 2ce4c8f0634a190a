/// Tools for listing habits and looking up a single habit
///
/// This module implements the habit_list and habit_get MCP tools.

use serde::{Deserialize, Serialize};
use crate::domain::{Clock, HabitError};
use crate::service::{HabitService, HabitView};
use crate::storage::HabitStorage;
use crate::tools::{HabitIdParams, ToolResponse};

/// Parameters for listing habits (none today)
#[derive(Debug, Default, Deserialize)]
pub struct ListHabitsParams {}

/// Summary statistics for all habits
#[derive(Debug, Serialize)]
pub struct HabitListSummary {
    pub total_habits: usize,
    /// Habits with a current streak above zero
    pub active_streaks: usize,
    pub longest_current_streak: u32,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitView>,
    pub summary: HabitListSummary,
    pub message: String,
}

impl ToolResponse for ListHabitsResponse {
    fn message(&self) -> &str {
        &self.message
    }
}

/// List habits using the provided service
pub fn list_habits<S: HabitStorage, C: Clock>(
    service: &HabitService<S, C>,
    _params: ListHabitsParams,
) -> Result<ListHabitsResponse, HabitError> {
    let habits = service.list_habits();

    let summary = HabitListSummary {
        total_habits: habits.len(),
        active_streaks: habits.iter().filter(|h| h.current_streak > 0).count(),
        longest_current_streak: habits.iter().map(|h| h.current_streak).max().unwrap_or(0),
    };

    let message = if habits.is_empty() {
        "No habits found. Create your first habit to get started!".to_string()
    } else {
        let lines = habits
            .iter()
            .map(|h| format!("#{} {} | streak: {} | marks: {}", h.id, h.name, h.current_streak, h.marks.len()))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{} habits, {} with an active streak\n\n{}",
            summary.total_habits, summary.active_streaks, lines
        )
    };

    Ok(ListHabitsResponse {
        habits,
        summary,
        message,
    })
}

/// Response from looking up a single habit
#[derive(Debug, Serialize)]
pub struct GetHabitResponse {
    pub habit: HabitView,
    pub marked_today: bool,
    pub message: String,
}

impl ToolResponse for GetHabitResponse {
    fn message(&self) -> &str {
        &self.message
    }
}

/// Get one habit using the provided service
pub fn get_habit<S: HabitStorage, C: Clock>(
    service: &HabitService<S, C>,
    params: HabitIdParams,
) -> Result<GetHabitResponse, HabitError> {
    let (habit, marked_today) = service.get_habit_status(params.habit_id)?;

    let message = format!(
        "#{} {} | streak: {} | marks: {}{}",
        habit.id,
        habit.name,
        habit.current_streak,
        habit.marks.len(),
        if marked_today { " | done today" } else { "" }
    );

    Ok(GetHabitResponse {
        habit,
        marked_today,
        message,
    })
}
