/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents something the
/// user wants to do every day, along with the name rules shared by create and
/// rename.

use serde::Serialize;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use crate::domain::{HabitError, HabitId};

/// A habit the user wants to track daily
///
/// `marks` is a set of calendar dates: a day is either marked or not.
/// Only the store creates habits, so the constructor is crate-private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Habit {
    /// Unique identifier for this habit, fixed for its lifetime
    pub id: HabitId,
    /// Display name, already trimmed (e.g., "Morning Run")
    pub name: String,
    /// Days on which the habit was completed
    pub marks: BTreeSet<NaiveDate>,
}

impl Habit {
    pub(crate) fn new(id: HabitId, name: String) -> Self {
        Self {
            id,
            name,
            marks: BTreeSet::new(),
        }
    }

    /// Normalize a raw habit name
    ///
    /// Returns the trimmed name, or `InvalidInput` when nothing is left.
    pub fn normalize_name(raw: &str) -> Result<String, HabitError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(HabitError::InvalidInput {
                message: "Habit name cannot be empty".to_string(),
            });
        }

        Ok(trimmed.to_string())
    }

    /// Key used for case-insensitive name comparison
    pub fn name_key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Check whether this habit's name collides with `name`, ignoring case
    pub fn has_name_like(&self, name: &str) -> bool {
        Self::name_key(&self.name) == Self::name_key(name)
    }

    /// Check if the habit was marked on a given day
    pub fn is_marked_on(&self, date: NaiveDate) -> bool {
        self.marks.contains(&date)
    }

    /// Total number of marked days
    pub fn total_marks(&self) -> usize {
        self.marks.len()
    }
}
