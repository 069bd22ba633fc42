use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    controller::health::{health, index},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}
