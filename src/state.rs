use crate::models::Habit;
use crate::store::HabitStore;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::Mutex;

/// Everything a handler needs: where habits persist, how long the mock
/// fetch sleeps, and the shared store. Each instance is independent, so
/// tests build their own.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub seed_delay: Duration,
    pub store: Arc<Mutex<HabitStore>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, seed_delay: Duration, habits: Vec<Habit>) -> Self {
        Self {
            data_path,
            seed_delay,
            store: Arc::new(Mutex::new(HabitStore::new(habits))),
        }
    }
}
