use crate::errors::AppError;
use crate::models::{Habit, StoredState, STORED_STATE_VERSION};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("HABITS_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

/// Rehydrates the habit list from the data file. Absent file means a fresh
/// install; anything unreadable is logged and treated the same way.
pub async fn load_habits(path: &Path) -> Vec<Habit> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<StoredState>(&bytes) {
            Ok(state) if state.version == STORED_STATE_VERSION => state.habits,
            Ok(state) => {
                error!(
                    "data file has unsupported version {} (expected {STORED_STATE_VERSION})",
                    state.version
                );
                Vec::new()
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Vec::new()
        }
    }
}

pub async fn persist_habits(path: &Path, habits: &[Habit]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(&StoredState::new(habits.to_vec()))?;
    fs::write(path, payload).await?;
    Ok(())
}
