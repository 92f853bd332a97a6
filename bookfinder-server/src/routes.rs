//! HTTP routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // Fragment endpoints, scoped to one page session
    let ui_routes = Router::new()
        .route("/:session/mode/:mode", post(handlers::set_mode))
        .route("/:session/search", get(handlers::search))
        .route("/:session/random", get(handlers::random_books))
        .route(
            "/:session/cards/:index/toggle",
            post(handlers::toggle_description),
        )
        .route("/:session/cards/:index/open", post(handlers::open_details));

    Router::new()
        .route("/", get(handlers::index))
        .route("/static/app.js", get(handlers::script))
        .route("/health", get(handlers::health_check))
        .nest("/ui", ui_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
