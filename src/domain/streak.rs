/// Current streak calculation
///
/// A streak is the run of consecutive marked days ending today or yesterday.
/// Missing a single day does not break it yet: a habit marked yesterday but
/// not today still has an active streak, so the user can mark it today and
/// keep going. Two unmarked days in a row end it.

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Calculate the current consecutive-day streak as of `today`
///
/// Counting starts from today when it is marked, otherwise from yesterday,
/// and walks backward until the first unmarked day.
pub fn current_streak(marks: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let yesterday = match today.pred_opt() {
        Some(day) => day,
        None => return u32::from(marks.contains(&today)),
    };

    let mut checking_date = if marks.contains(&today) {
        today
    } else if marks.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    while marks.contains(&checking_date) {
        streak += 1;
        checking_date = match checking_date.pred_opt() {
            Some(day) => day,
            None => break,
        };
    }

    streak
}

/// Short encouragement text for a streak length
pub fn streak_message(current_streak: u32) -> String {
    match current_streak {
        0 => "Ready to start your streak! Mark it today to begin.".to_string(),
        1 => "Great start! One day down, keep the momentum going.".to_string(),
        2..=6 => format!("Nice work! {} days in a row.", current_streak),
        7..=29 => format!("Excellent! {} days strong.", current_streak),
        _ => format!("Incredible! {} days of consistency.", current_streak),
    }
}
