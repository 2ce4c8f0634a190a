/// Service workflows driven by a fixed clock
use habit_tracker_core::*;
use chrono::NaiveDate;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn service() -> HabitService<HabitStore, FixedClock> {
    HabitService::new(HabitStore::new(), FixedClock::new(start()))
}

#[test]
fn test_full_habit_lifecycle() {
    let service = service();

    let habit = service.create_habit("  Morning Run ").unwrap();
    assert_eq!(habit.id, HabitId(1));
    assert_eq!(habit.name, "Morning Run");

    service.mark_today(habit.id).unwrap();
    service.clock().advance_days(1);
    service.mark_today(habit.id).unwrap();
    service.clock().advance_days(1);
    service.mark_today(habit.id).unwrap();

    let view = service.get_habit(habit.id).unwrap();
    assert_eq!(view.current_streak, 3);
    assert_eq!(view.marks.len(), 3);

    let renamed = service.rename_habit(habit.id, "Evening Run").unwrap();
    assert_eq!(renamed.id, habit.id);
    assert_eq!(renamed.current_streak, 3);

    service.delete_habit(habit.id).unwrap();
    assert!(service.list_habits().is_empty());
}

#[test]
fn test_stats_after_a_month_of_gaps() {
    let service = service();
    let habit = service.create_habit("Stretch").unwrap();

    // days 0..=4 marked, 5..=9 skipped, 10..=12 marked
    for day in 0..13 {
        if !(5..10).contains(&day) {
            service.mark_today(habit.id).unwrap();
        }
        service.clock().advance_days(1);
    }
    // now on day 13, which isn't marked: yesterday keeps the streak alive
    let stats = service.get_stats(habit.id).unwrap();
    assert_eq!(stats.total_marks, 8);
    assert_eq!(stats.current_streak, 3);
    assert_eq!(stats.max_streak, 5);
    // 8 marks over 14 days
    assert_eq!(stats.success_rate, 57.14);
    assert_eq!(stats.last_dates.len(), 5);
    assert_eq!(stats.last_dates[0], NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
    assert!(stats.last_dates.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn test_deleted_habit_fails_everywhere() {
    let service = service();
    let habit = service.create_habit("Read").unwrap();
    service.delete_habit(habit.id).unwrap();

    let not_found = HabitError::NotFound { habit_id: habit.id };
    assert_eq!(service.get_habit(habit.id).unwrap_err(), not_found);
    assert_eq!(service.rename_habit(habit.id, "Write").unwrap_err(), not_found);
    assert_eq!(service.mark_today(habit.id).unwrap_err(), not_found);
    assert_eq!(service.get_stats(habit.id).unwrap_err(), not_found);
    assert_eq!(service.is_marked_today(habit.id).unwrap_err(), not_found);
    assert_eq!(service.delete_habit(habit.id).unwrap_err(), not_found);
}

#[test]
fn test_rename_to_own_name_is_noop() {
    let service = service();
    let habit = service.create_habit("Read").unwrap();
    assert_eq!(service.rename_habit(habit.id, "Read").unwrap(), habit);
}

#[test]
fn test_name_conflict_is_case_insensitive() {
    let service = service();
    service.create_habit("Бег").unwrap();
    assert!(matches!(
        service.create_habit("бег").unwrap_err(),
        HabitError::NameConflict { .. }
    ));
    assert_eq!(service.list_habits().len(), 1);
}

#[test]
fn test_service_over_shared_store() {
    use std::sync::Arc;

    let store = Arc::new(HabitStore::with_seed(10));
    let clock = Arc::new(FixedClock::new(start()));
    let service = HabitService::new(Arc::clone(&store), Arc::clone(&clock));

    let habit = service.create_habit("Read").unwrap();
    assert_eq!(habit.id, HabitId(10));
    assert_eq!(store.len(), 1);

    service.mark_today(habit.id).unwrap();
    clock.advance_days(2);
    assert_eq!(service.get_habit(habit.id).unwrap().current_streak, 0);
}
