use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Cadence a habit is intended to recur at. Streaks are always
/// daily-granular regardless of frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
}

/// One tracked habit. Field names stay camelCase on disk to match the
/// layout the app has always persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub frequency: Frequency,
    pub completed_dates: BTreeSet<String>,
    pub created_at: String,
}

pub const STORED_STATE_VERSION: u32 = 1;

fn stored_state_version() -> u32 {
    STORED_STATE_VERSION
}

/// On-disk layout. Payloads written before versioning carry no `version`
/// field and parse as version 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default = "stored_state_version")]
    pub version: u32,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

impl StoredState {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self {
            version: STORED_STATE_VERSION,
            habits,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
    pub frequency: Frequency,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToggleRequest {
    pub date: Option<String>,
}

/// A habit as the page sees it: stored fields plus the derived bits the
/// list renders.
#[derive(Debug, Serialize)]
pub struct HabitView {
    pub id: String,
    pub name: String,
    pub frequency: Frequency,
    pub completed_dates: Vec<String>,
    pub created_at: String,
    pub streak: u32,
    pub completed_today: bool,
}

#[derive(Debug, Serialize)]
pub struct HabitsResponse {
    pub habits: Vec<HabitView>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_habits: usize,
    pub ever_completed: usize,
    pub completed_today: usize,
    pub completion_rate: u32,
}
