/// In-memory implementation of the habit storage interface
///
/// A single mutex guards the habit map and the id counter. Each operation
/// holds it from its first check to its last write, so concurrent callers
/// always observe the state left by the latest completed mutation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use chrono::NaiveDate;

use crate::domain::{Habit, HabitError, HabitId};
use crate::storage::HabitStorage;

/// First id handed out by a store built with `HabitStore::new`
pub const DEFAULT_ID_SEED: u64 = 1;

/// Mutable state behind the store lock
#[derive(Debug)]
struct StoreState {
    habits: HashMap<HabitId, Habit>,
    /// `None` once `u64::MAX` has been handed out
    next_id: Option<HabitId>,
}

impl StoreState {
    fn allocate_id(&mut self) -> Result<HabitId, HabitError> {
        let id = self.next_id.ok_or_else(|| HabitError::InvalidInput {
            message: "No habit ids left to allocate".to_string(),
        })?;
        self.next_id = id.next();
        Ok(id)
    }

    fn habit_mut(&mut self, habit_id: HabitId) -> Result<&mut Habit, HabitError> {
        self.habits
            .get_mut(&habit_id)
            .ok_or_else(|| HabitError::not_found(habit_id))
    }

    /// Fail with `NameConflict` if a habit other than `except` holds `name`
    fn ensure_name_free(&self, name: &str, except: Option<HabitId>) -> Result<(), HabitError> {
        let taken = self
            .habits
            .values()
            .any(|h| Some(h.id) != except && h.has_name_like(name));

        if taken {
            return Err(HabitError::NameConflict {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

/// Store holding every habit for the lifetime of the process
///
/// Ids are allocated monotonically starting at the seed and are never reused,
/// even after the habit holding them is deleted.
#[derive(Debug)]
pub struct HabitStore {
    state: Mutex<StoreState>,
}

impl HabitStore {
    /// Create an empty store allocating ids from 1
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_ID_SEED)
    }

    /// Create an empty store whose first habit gets id `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: Mutex::new(StoreState {
                habits: HashMap::new(),
                next_id: Some(HabitId(seed)),
            }),
        }
    }

    /// Number of habits currently stored
    pub fn len(&self) -> usize {
        self.state().habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Operations validate before they mutate, so the state behind a poisoned
    // lock is still consistent and safe to keep using.
    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for HabitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitStorage for HabitStore {
    fn create_habit(&self, name: &str) -> Result<Habit, HabitError> {
        let name = Habit::normalize_name(name)?;

        let mut state = self.state();
        state.ensure_name_free(&name, None)?;

        let id = state.allocate_id()?;

        let habit = Habit::new(id, name);
        state.habits.insert(id, habit.clone());

        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        Ok(habit)
    }

    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, HabitError> {
        self.state()
            .habits
            .get(&habit_id)
            .cloned()
            .ok_or_else(|| HabitError::not_found(habit_id))
    }

    fn list_habits(&self) -> Vec<Habit> {
        let mut habits: Vec<Habit> = self.state().habits.values().cloned().collect();
        habits.sort_by_key(|h| h.id);
        habits
    }

    fn rename_habit(&self, habit_id: HabitId, new_name: &str) -> Result<Habit, HabitError> {
        let mut state = self.state();
        let current = state
            .habits
            .get(&habit_id)
            .ok_or_else(|| HabitError::not_found(habit_id))?;

        let new_name = Habit::normalize_name(new_name)?;
        if current.name == new_name {
            return Ok(current.clone());
        }

        state.ensure_name_free(&new_name, Some(habit_id))?;

        let habit = state.habit_mut(habit_id)?;
        let old_name = std::mem::replace(&mut habit.name, new_name);

        tracing::debug!("Renamed habit {}: '{}' -> '{}'", habit.id, old_name, habit.name);
        Ok(habit.clone())
    }

    fn delete_habit(&self, habit_id: HabitId) -> Result<(), HabitError> {
        let removed = self
            .state()
            .habits
            .remove(&habit_id)
            .ok_or_else(|| HabitError::not_found(habit_id))?;

        tracing::debug!("Deleted habit: {} ({})", removed.name, removed.id);
        Ok(())
    }

    fn add_mark(&self, habit_id: HabitId, date: NaiveDate) -> Result<Habit, HabitError> {
        let mut state = self.state();
        let habit = state.habit_mut(habit_id)?;

        if !habit.marks.insert(date) {
            return Err(HabitError::AlreadyMarked { habit_id, date });
        }

        tracing::debug!("Marked habit {} ({}) for {}", habit.name, habit.id, date);
        Ok(habit.clone())
    }
}
