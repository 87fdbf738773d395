use crate::models::{Habit, StatsResponse};
use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Consecutive completed days walking backward from `today` inclusive.
/// An unmarked today breaks the streak immediately, regardless of history.
pub fn streak_at(today: NaiveDate, completed: &BTreeSet<String>) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while completed.contains(&date_key(day)) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

pub fn completed_on(date: NaiveDate, habit: &Habit) -> bool {
    habit.completed_dates.contains(&date_key(date))
}

pub fn build_stats(habits: &[Habit]) -> StatsResponse {
    build_stats_at(today(), habits)
}

// `ever_completed` counts habits with at least one completion on record,
// not habits currently active or done today.
pub fn build_stats_at(today: NaiveDate, habits: &[Habit]) -> StatsResponse {
    let total_habits = habits.len();
    let ever_completed = habits
        .iter()
        .filter(|habit| !habit.completed_dates.is_empty())
        .count();
    let completed_today = habits
        .iter()
        .filter(|habit| completed_on(today, habit))
        .count();
    let completion_rate = if total_habits == 0 {
        0
    } else {
        (100.0 * ever_completed as f64 / total_habits as f64).round() as u32
    };

    StatsResponse {
        total_habits,
        ever_completed,
        completed_today,
        completion_rate,
    }
}
