/// Habit service: the operations exposed to callers
///
/// The service composes the store, the clock and the calculators. It adds no
/// validation of its own: invariants are enforced by the store, derived
/// numbers come from the streak and stats functions, and every `HabitError`
/// passes through unchanged.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{HabitStats, StatsEngine};
use crate::domain::{current_streak, Clock, Habit, HabitError, HabitId};
use crate::storage::HabitStorage;

/// A habit as shown to callers, enriched with its current streak
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitView {
    pub id: HabitId,
    pub name: String,
    /// Marked days, oldest first
    pub marks: Vec<NaiveDate>,
    pub current_streak: u32,
}

impl HabitView {
    fn from_habit(habit: Habit, today: NaiveDate) -> Self {
        let current_streak = current_streak(&habit.marks, today);
        Self {
            id: habit.id,
            name: habit.name,
            marks: habit.marks.into_iter().collect(),
            current_streak,
        }
    }
}

/// Result of marking a habit for today
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkResult {
    #[serde(flatten)]
    pub habit: HabitView,
    /// The day that was just marked
    pub last_marked_at: NaiveDate,
}

/// Facade over the habit store and the statistics calculators
pub struct HabitService<S: HabitStorage, C: Clock> {
    storage: S,
    clock: C,
    stats: StatsEngine,
}

impl<S: HabitStorage, C: Clock> HabitService<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            stats: StatsEngine::new(),
        }
    }

    /// Create a habit from a raw name
    pub fn create_habit(&self, name: &str) -> Result<HabitView, HabitError> {
        let habit = self.storage.create_habit(name)?;
        Ok(self.view(habit))
    }

    /// All habits ordered by id, each with its current streak
    pub fn list_habits(&self) -> Vec<HabitView> {
        let today = self.clock.today();
        self.storage
            .list_habits()
            .into_iter()
            .map(|habit| HabitView::from_habit(habit, today))
            .collect()
    }

    pub fn get_habit(&self, habit_id: HabitId) -> Result<HabitView, HabitError> {
        let habit = self.storage.get_habit(habit_id)?;
        Ok(self.view(habit))
    }

    pub fn rename_habit(&self, habit_id: HabitId, name: &str) -> Result<HabitView, HabitError> {
        let habit = self.storage.rename_habit(habit_id, name)?;
        Ok(self.view(habit))
    }

    pub fn delete_habit(&self, habit_id: HabitId) -> Result<(), HabitError> {
        self.storage.delete_habit(habit_id)
    }

    /// Mark the habit as done for the clock's current day
    pub fn mark_today(&self, habit_id: HabitId) -> Result<MarkResult, HabitError> {
        let today = self.clock.today();
        let habit = self.storage.add_mark(habit_id, today)?;

        Ok(MarkResult {
            habit: HabitView::from_habit(habit, today),
            last_marked_at: today,
        })
    }

    /// One habit plus whether it is marked today, from a single read
    pub fn get_habit_status(&self, habit_id: HabitId) -> Result<(HabitView, bool), HabitError> {
        let today = self.clock.today();
        let habit = self.storage.get_habit(habit_id)?;
        let marked_today = habit.is_marked_on(today);
        Ok((HabitView::from_habit(habit, today), marked_today))
    }

    /// Check whether the habit already has a mark for today
    pub fn is_marked_today(&self, habit_id: HabitId) -> Result<bool, HabitError> {
        self.get_habit_status(habit_id).map(|(_, marked_today)| marked_today)
    }

    pub fn get_stats(&self, habit_id: HabitId) -> Result<HabitStats, HabitError> {
        let habit = self.storage.get_habit(habit_id)?;
        Ok(self.stats.stats(&habit, self.clock.today()))
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn view(&self, habit: Habit) -> HabitView {
        HabitView::from_habit(habit, self.clock.today())
    }
}
