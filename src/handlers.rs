use crate::errors::AppError;
use crate::models::{
    AddHabitRequest, HabitView, HabitsResponse, StatsResponse, ToggleRequest,
};
use crate::state::AppState;
use crate::stats::{build_stats, completed_on, date_key, streak_at, today};
use crate::store::{fetch_habits, HabitStore};
use crate::storage::persist_habits;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(&date_key(today()), store.habits.len()))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<HabitsResponse> {
    let store = state.store.lock().await;
    Json(snapshot(&store))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<HabitsResponse>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("habit name must not be empty"));
    }

    let mut store = state.store.lock().await;
    store.add_habit(name, payload.frequency);
    persist(&state, &store).await;

    Ok(Json(snapshot(&store)))
}

pub async fn remove_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<HabitsResponse> {
    let mut store = state.store.lock().await;
    if store.remove_habit(&id) {
        persist(&state, &store).await;
    }
    Json(snapshot(&store))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<HabitsResponse>, AppError> {
    let date = match payload.date {
        Some(date) => {
            if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
                return Err(AppError::bad_request("date must use the YYYY-MM-DD format"));
            }
            date
        }
        None => date_key(today()),
    };

    let mut store = state.store.lock().await;
    if store.toggle_habit(&id, &date) {
        persist(&state, &store).await;
    }
    Ok(Json(snapshot(&store)))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.lock().await;
    Json(build_stats(&store.habits))
}

/// Re-runs the bootstrap fetch; the retry path after a failed load.
pub async fn seed(State(state): State<AppState>) -> Json<HabitsResponse> {
    fetch_habits(&state).await;
    let store = state.store.lock().await;
    persist(&state, &store).await;
    Json(snapshot(&store))
}

// Persistence is fire-and-forget: a write failure must not fail the
// request that performed a perfectly good in-memory mutation.
async fn persist(state: &AppState, store: &HabitStore) {
    if let Err(err) = persist_habits(&state.data_path, &store.habits).await {
        warn!("failed to persist habits: {err}");
    }
}

fn snapshot(store: &HabitStore) -> HabitsResponse {
    let today = today();
    HabitsResponse {
        habits: store
            .habits
            .iter()
            .map(|habit| HabitView {
                id: habit.id.clone(),
                name: habit.name.clone(),
                frequency: habit.frequency,
                completed_dates: habit.completed_dates.iter().cloned().collect(),
                created_at: habit.created_at.clone(),
                streak: streak_at(today, &habit.completed_dates),
                completed_today: completed_on(today, habit),
            })
            .collect(),
        is_loading: store.is_loading,
        error: store.error.clone(),
    }
}
