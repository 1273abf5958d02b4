use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/quote/:ticker", get(handlers::get_quote))
        .route("/api/projection", post(handlers::create_projection))
        .route("/api/projection/:ticker", post(handlers::create_ticker_projection))
        .with_state(state)
}
