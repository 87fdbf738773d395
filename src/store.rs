use crate::models::{Frequency, Habit};
use crate::state::AppState;
use chrono::Local;
use std::collections::BTreeSet;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;
use uuid::Uuid;

pub const DEFAULT_SEED_DELAY: Duration = Duration::from_millis(800);

/// Single source of truth for habit data. All mutations happen through the
/// methods below; callers persist after any method that reports a change.
#[derive(Debug, Default)]
pub struct HabitStore {
    pub habits: Vec<Habit>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl HabitStore {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self {
            habits,
            is_loading: false,
            error: None,
        }
    }

    /// Appends a new habit; existing entries are untouched and the new one
    /// is always last in iteration order.
    pub fn add_habit(&mut self, name: &str, frequency: Frequency) {
        self.habits.push(Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            frequency,
            completed_dates: BTreeSet::new(),
            created_at: Local::now().to_rfc3339(),
        });
    }

    /// Removes the habit with the given id. Unknown ids are a silent no-op;
    /// returns whether anything was removed.
    pub fn remove_habit(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        self.habits.len() != before
    }

    /// Strict toggle: marks `date` done if absent, un-marks it if present.
    /// Unknown ids are a silent no-op; returns whether anything changed.
    pub fn toggle_habit(&mut self, id: &str, date: &str) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            return false;
        };
        if !habit.completed_dates.insert(date.to_string()) {
            habit.completed_dates.remove(date);
        }
        true
    }
}

/// The mock habits installed on first load.
pub fn seed_habits() -> Vec<Habit> {
    let created_at = Local::now().to_rfc3339();
    [
        ("Read a book", Frequency::Daily),
        ("Go to gym", Frequency::Daily),
        ("Watch a documentary", Frequency::Weekly),
    ]
    .into_iter()
    .map(|(name, frequency)| Habit {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        frequency,
        completed_dates: BTreeSet::new(),
        created_at: created_at.clone(),
    })
    .collect()
}

/// Simulated asynchronous load: seeds the store with mock habits if it is
/// still empty once the fixed delay elapses. Callers persist afterwards.
pub async fn fetch_habits(state: &AppState) {
    fetch_with(state, || Ok(seed_habits())).await;
}

/// The lock is released across the sleep so add/remove/toggle stay
/// responsive while the load is in flight. Emptiness is re-checked after
/// re-acquiring: a habit added mid-flight wins and the seeds are skipped.
async fn fetch_with(state: &AppState, load: impl FnOnce() -> Result<Vec<Habit>, String>) {
    {
        let mut store = state.store.lock().await;
        if !store.habits.is_empty() {
            store.is_loading = false;
            return;
        }
        store.is_loading = true;
    }

    sleep(state.seed_delay).await;

    let mut store = state.store.lock().await;
    match load() {
        Ok(seeds) => {
            if store.habits.is_empty() {
                info!("seeding {} mock habits", seeds.len());
                store.habits = seeds;
            }
            store.error = None;
        }
        Err(message) => {
            store.error = Some(message);
        }
    }
    store.is_loading = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_state(habits: Vec<Habit>) -> AppState {
        AppState::new(PathBuf::from("unused"), Duration::from_millis(10), habits)
    }

    #[test]
    fn add_assigns_distinct_ids_in_call_order() {
        let mut store = HabitStore::default();
        store.add_habit("Read a book", Frequency::Daily);
        store.add_habit("Go to gym", Frequency::Weekly);
        store.add_habit("Stretch", Frequency::Daily);

        assert_eq!(store.habits.len(), 3);
        let names: Vec<_> = store.habits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Read a book", "Go to gym", "Stretch"]);

        let mut ids: Vec<_> = store.habits.iter().map(|h| h.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn add_starts_with_no_completions() {
        let mut store = HabitStore::default();
        store.add_habit("Read a book", Frequency::Daily);
        let habit = &store.habits[0];
        assert!(habit.completed_dates.is_empty());
        assert!(!habit.created_at.is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = HabitStore::default();
        store.add_habit("Read a book", Frequency::Daily);
        let id = store.habits[0].id.clone();

        assert!(store.remove_habit(&id));
        assert_eq!(store.habits.len(), 0);
        assert!(!store.remove_habit(&id));
        assert_eq!(store.habits.len(), 0);
    }

    #[test]
    fn toggle_twice_restores_original_dates() {
        let mut store = HabitStore::default();
        store.add_habit("Read a book", Frequency::Daily);
        let id = store.habits[0].id.clone();

        assert!(store.toggle_habit(&id, "2026-08-27"));
        assert!(store.habits[0].completed_dates.contains("2026-08-27"));
        assert!(store.toggle_habit(&id, "2026-08-27"));
        assert!(store.habits[0].completed_dates.is_empty());
    }

    #[test]
    fn toggle_leaves_other_habits_and_dates_alone() {
        let mut store = HabitStore::default();
        store.add_habit("Read a book", Frequency::Daily);
        store.add_habit("Go to gym", Frequency::Daily);
        let first = store.habits[0].id.clone();
        let second = store.habits[1].id.clone();
        store.toggle_habit(&first, "2026-08-26");
        store.toggle_habit(&first, "2026-08-27");

        store.toggle_habit(&second, "2026-08-27");

        assert_eq!(store.habits[0].completed_dates.len(), 2);
        assert_eq!(store.habits[1].completed_dates.len(), 1);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut store = HabitStore::default();
        store.add_habit("Read a book", Frequency::Daily);
        let before = store.habits.clone();

        assert!(!store.toggle_habit("missing", "2026-08-27"));
        assert_eq!(store.habits, before);
    }

    #[tokio::test]
    async fn fetch_seeds_three_habits_when_empty() {
        let state = test_state(Vec::new());
        fetch_habits(&state).await;

        let store = state.store.lock().await;
        assert!(!store.is_loading);
        assert!(store.error.is_none());
        let names: Vec<_> = store.habits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Read a book", "Go to gym", "Watch a documentary"]);
        assert_eq!(store.habits[0].frequency, Frequency::Daily);
        assert_eq!(store.habits[2].frequency, Frequency::Weekly);
        assert!(store.habits.iter().all(|h| h.completed_dates.is_empty()));
    }

    #[tokio::test]
    async fn fetch_leaves_existing_habits_alone() {
        let state = test_state(Vec::new());
        {
            let mut store = state.store.lock().await;
            store.add_habit("Read a book", Frequency::Daily);
        }

        fetch_habits(&state).await;

        let store = state.store.lock().await;
        assert!(!store.is_loading);
        assert_eq!(store.habits.len(), 1);
        assert_eq!(store.habits[0].name, "Read a book");
    }

    #[tokio::test]
    async fn habit_added_during_fetch_survives() {
        let state = test_state(Vec::new());

        let fetching = {
            let state = state.clone();
            tokio::spawn(async move { fetch_habits(&state).await })
        };

        // Wait for the fetch to take its initial look and start sleeping.
        loop {
            let mut store = state.store.lock().await;
            if store.is_loading {
                store.add_habit("Added mid-flight", Frequency::Daily);
                break;
            }
            drop(store);
            tokio::task::yield_now().await;
        }

        fetching.await.unwrap();

        let store = state.store.lock().await;
        assert!(!store.is_loading);
        assert_eq!(store.habits.len(), 1);
        assert_eq!(store.habits[0].name, "Added mid-flight");
    }

    #[tokio::test]
    async fn failed_fetch_records_error_and_keeps_habits() {
        let state = test_state(Vec::new());
        fetch_with(&state, || Err("mock load failed".to_string())).await;

        let store = state.store.lock().await;
        assert!(!store.is_loading);
        assert_eq!(store.error.as_deref(), Some("mock load failed"));
        assert!(store.habits.is_empty());
    }

    #[tokio::test]
    async fn successful_fetch_clears_previous_error() {
        let state = test_state(Vec::new());
        fetch_with(&state, || Err("mock load failed".to_string())).await;
        fetch_habits(&state).await;

        let store = state.store.lock().await;
        assert!(store.error.is_none());
        assert_eq!(store.habits.len(), 3);
    }
}
