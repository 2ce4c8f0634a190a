/// Core identifier types used throughout the domain layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a habit
///
/// This is a wrapper around the integer id allocated by the store, so a
/// habit id can't be confused with a count or a day offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub u64);

impl HabitId {
    /// Get the raw integer value
    pub fn value(self) -> u64 {
        self.0
    }

    /// The id allocated right after this one, `None` past `u64::MAX`
    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for HabitId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
