/// Domain module containing core business logic and data types
///
/// This module defines the core entity (Habit), the clock that supplies
/// "today", and the streak rules. These types represent the fundamental
/// concepts in our habit tracking system.

pub mod clock;
pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use clock::*;
pub use habit::*;
pub use streak::*;
pub use types::*;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during habit operations
///
/// These are the only failure signals of the store and the calculators.
/// All of them are expected, recoverable conditions; the caller decides how
/// to present them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HabitError {
    #[error("Habit not found: {habit_id}")]
    NotFound { habit_id: HabitId },

    #[error("Habit with name '{name}' already exists")]
    NameConflict { name: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Habit {habit_id} already marked for {date}")]
    AlreadyMarked { habit_id: HabitId, date: NaiveDate },
}

impl HabitError {
    pub(crate) fn not_found(habit_id: HabitId) -> Self {
        Self::NotFound { habit_id }
    }
}
