use habit_tracker::{
    fetch_habits, load_habits, persist_habits, resolve_data_path, router, AppState,
    DEFAULT_SEED_DELAY,
};
use std::{env, net::SocketAddr, time::Duration};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let habits = load_habits(&data_path).await;
    let state = AppState::new(data_path, resolve_seed_delay(), habits);

    // Bootstrap load: seeds mock habits on a fresh install, returns
    // immediately when the data file already had entries.
    fetch_habits(&state).await;
    {
        let store = state.store.lock().await;
        if let Err(err) = persist_habits(&state.data_path, &store.habits).await {
            warn!("failed to persist habits after bootstrap: {err}");
        }
    }

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn resolve_seed_delay() -> Duration {
    env::var("HABITS_SEED_DELAY_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_SEED_DELAY)
}
