/// Statistics engine for habit mark histories
///
/// This module derives adherence numbers from a habit's marks: the longest
/// run ever achieved, the share of elapsed days that were marked, and the
/// combined per-habit stats report. Everything here is a pure function of
/// values already copied out of the store.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::{current_streak, Habit, HabitId};

/// How many recent marks a stats report carries
pub const RECENT_MARKS_LIMIT: usize = 5;

/// Aggregated statistics for a single habit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStats {
    pub id: HabitId,
    pub name: String,
    pub total_marks: usize,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Percentage of days marked since the first mark, 0.0 to 100.0
    pub success_rate: f64,
    /// Most recent marks, newest first
    pub last_dates: Vec<NaiveDate>,
}

/// Stateless engine computing habit statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsEngine;

impl StatsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Longest run of consecutive marked days anywhere in the history
    pub fn max_streak(&self, marks: &BTreeSet<NaiveDate>) -> u32 {
        let mut dates = marks.iter();
        let mut last_date = match dates.next() {
            Some(date) => *date,
            None => return 0,
        };

        let mut longest_streak: u32 = 1;
        let mut current_run: u32 = 1;

        // BTreeSet iterates in ascending order with no duplicates
        for &date in dates {
            if (date - last_date).num_days() == 1 {
                current_run += 1;
            } else {
                longest_streak = longest_streak.max(current_run);
                current_run = 1;
            }
            last_date = date;
        }

        longest_streak.max(current_run)
    }

    /// Percentage of days marked from the first mark through `today`
    ///
    /// Both endpoints count. The result is rounded to two decimals and capped
    /// at 100; a history starting after `today` yields 0.
    pub fn success_rate(&self, marks: &BTreeSet<NaiveDate>, today: NaiveDate) -> f64 {
        let first = match marks.first() {
            Some(date) => *date,
            None => return 0.0,
        };

        let days_since_start = (today - first).num_days() + 1;
        if days_since_start <= 0 {
            return 0.0;
        }

        let rate = 100.0 * marks.len() as f64 / days_since_start as f64;
        round_to_hundredths(rate.min(100.0))
    }

    /// Newest marks first, at most `limit` of them
    pub fn recent_marks(&self, marks: &BTreeSet<NaiveDate>, limit: usize) -> Vec<NaiveDate> {
        marks.iter().rev().take(limit).copied().collect()
    }

    /// Full statistics report for a habit as of `today`
    pub fn stats(&self, habit: &Habit, today: NaiveDate) -> HabitStats {
        HabitStats {
            id: habit.id,
            name: habit.name.clone(),
            total_marks: habit.total_marks(),
            current_streak: current_streak(&habit.marks, today),
            max_streak: self.max_streak(&habit.marks),
            success_rate: self.success_rate(&habit.marks, today),
            last_dates: self.recent_marks(&habit.marks, RECENT_MARKS_LIMIT),
        }
    }
}

// Exact halves go to the even neighbour
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
