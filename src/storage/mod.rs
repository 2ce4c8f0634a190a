/// Storage layer owning the habit collection
///
/// This module holds the authoritative set of habits and enforces the entity
/// invariants: unique ids, case-insensitive unique names, existence checks
/// and at most one mark per day.

pub mod memory;

// Re-export the main storage types
pub use memory::*;

use chrono::NaiveDate;
use crate::domain::{Habit, HabitError, HabitId};

/// Trait defining the storage interface for habits
///
/// Every method either applies its whole effect or none of it. Returned
/// habits are owned copies, so callers can compute on them without holding
/// any lock.
pub trait HabitStorage: Send + Sync {
    /// Create a new habit from a raw (untrimmed) name
    fn create_habit(&self, name: &str) -> Result<Habit, HabitError>;

    /// Get a habit by ID
    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, HabitError>;

    /// List all habits ordered by ascending id
    fn list_habits(&self) -> Vec<Habit>;

    /// Rename an existing habit
    fn rename_habit(&self, habit_id: HabitId, new_name: &str) -> Result<Habit, HabitError>;

    /// Delete a habit permanently
    fn delete_habit(&self, habit_id: HabitId) -> Result<(), HabitError>;

    /// Record a completion for the given day
    fn add_mark(&self, habit_id: HabitId, date: NaiveDate) -> Result<Habit, HabitError>;
}

impl<T: HabitStorage + ?Sized> HabitStorage for std::sync::Arc<T> {
    fn create_habit(&self, name: &str) -> Result<Habit, HabitError> {
        (**self).create_habit(name)
    }

    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, HabitError> {
        (**self).get_habit(habit_id)
    }

    fn list_habits(&self) -> Vec<Habit> {
        (**self).list_habits()
    }

    fn rename_habit(&self, habit_id: HabitId, new_name: &str) -> Result<Habit, HabitError> {
        (**self).rename_habit(habit_id, new_name)
    }

    fn delete_habit(&self, habit_id: HabitId) -> Result<(), HabitError> {
        (**self).delete_habit(habit_id)
    }

    fn add_mark(&self, habit_id: HabitId, date: NaiveDate) -> Result<Habit, HabitError> {
        (**self).add_mark(habit_id, date)
    }
}
