use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/filter", post(handlers::submit_filter_form))
        .route("/api/filter", get(handlers::get_filter).post(handlers::set_filter))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .with_state(state)
}
