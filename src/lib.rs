pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_habits, persist_habits, resolve_data_path};
pub use store::{fetch_habits, HabitStore, DEFAULT_SEED_DELAY};
