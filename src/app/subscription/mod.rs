use super::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub mod route;
pub mod schema;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(route::subscribe))
        .route("/status", get(route::clear_status))
}
