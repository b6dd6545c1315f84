//! Route table binding method and path combinations to handlers.

use super::handlers::{
    api_index, create_task, delete_task, get_task, health, list_tasks, route_not_found,
    update_task,
};
use super::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router over the given state.
///
/// Request tracing and permissive CORS are applied to every route; anything
/// that matches no route falls through to the distinct route-not-found
/// response.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task)
                .put(update_task)
                .patch(update_task)
                .delete(delete_task),
        )
        .route("/api", get(api_index))
        .route("/health", get(health))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
