/// Store invariants under arbitrary operation sequences
use habit_tracker_core::*;
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Create(String),
    Rename(u64, String),
    Delete(u64),
}

fn name_strategy() -> impl Strategy<Value = String> {
    // small alphabet with mixed case so collisions actually happen
    prop::sample::select(vec!["run", "Run", "RUN", " read ", "Read", "бег", "Бег", "", "  ", "swim"])
        .prop_map(|s| s.to_string())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        name_strategy().prop_map(Op::Create),
        (1u64..8, name_strategy()).prop_map(|(id, name)| Op::Rename(id, name)),
        (1u64..8).prop_map(Op::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: after any sequence of operations, ids are unique and names
    /// are unique ignoring case.
    #[test]
    fn ids_and_names_stay_unique(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let store = HabitStore::new();
        let mut ever_allocated = HashSet::new();

        for op in ops {
            match op {
                Op::Create(name) => {
                    if let Ok(habit) = store.create_habit(&name) {
                        // freed ids are never handed out again
                        prop_assert!(ever_allocated.insert(habit.id));
                        prop_assert_eq!(habit.name.as_str(), name.trim());
                    }
                }
                Op::Rename(id, name) => {
                    let before = store.get_habit(HabitId(id)).ok();
                    match store.rename_habit(HabitId(id), &name) {
                        Ok(habit) => prop_assert_eq!(habit.name.as_str(), name.trim()),
                        Err(_) => prop_assert_eq!(store.get_habit(HabitId(id)).ok(), before),
                    }
                }
                Op::Delete(id) => {
                    let _ = store.delete_habit(HabitId(id));
                }
            }

            let habits = store.list_habits();
            let ids: HashSet<_> = habits.iter().map(|h| h.id).collect();
            let names: HashSet<_> = habits.iter().map(|h| h.name.to_lowercase()).collect();
            prop_assert_eq!(ids.len(), habits.len());
            prop_assert_eq!(names.len(), habits.len());
            prop_assert!(habits.windows(2).all(|w| w[0].id < w[1].id));
            prop_assert!(habits.iter().all(|h| !h.name.trim().is_empty()));
        }
    }
}

#[test]
fn test_case_insensitive_conflict_on_create() {
    let store = HabitStore::new();
    store.create_habit("Бег").unwrap();
    assert!(matches!(
        store.create_habit("бег"),
        Err(HabitError::NameConflict { .. })
    ));
}

#[test]
fn test_failed_mark_leaves_marks_unchanged() {
    let store = HabitStore::new();
    let habit = store.create_habit("Read").unwrap();
    let day = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    store.add_mark(habit.id, day).unwrap();
    assert!(matches!(
        store.add_mark(habit.id, day),
        Err(HabitError::AlreadyMarked { .. })
    ));
    assert_eq!(store.get_habit(habit.id).unwrap().marks.len(), 1);
}
