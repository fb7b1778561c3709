use axum::Router;
use tower_http::services::ServeDir;

use super::AppState;

/// Stylesheets and other static files, served from `assets/` relative to the working directory.
pub fn router() -> Router<AppState> {
    Router::new().nest_service(
        "/assets",
        ServeDir::new("assets").append_index_html_on_directories(false),
    )
}
