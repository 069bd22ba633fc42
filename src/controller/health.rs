use axum::extract::State;

use crate::{error::AppError, state::AppState};

/// GET / - Plain text banner for uptime monitors
pub async fn index() -> &'static str {
    "bumpkeeper is running!"
}

/// GET /health - Liveness check including the database
///
/// # Returns
/// - `200 OK`: `OK`, the database answered a ping
/// - `503 Service Unavailable`: Database ping failed
pub async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.db.ping().await?;

    Ok("OK")
}
