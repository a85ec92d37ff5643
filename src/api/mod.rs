pub mod cors;
pub mod courses;

use axum::routing::{any, get};
use axum::{Router, extract::State, http::StatusCode, middleware};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

pub const API_BASE_PATH: &str = "/api";

pub fn router(state: AppState) -> Router {
    let courses = Router::new()
        .route(
            "/courses",
            get(courses::list_courses)
                .head(courses::method_not_allowed)
                .post(courses::create_course)
                .options(courses::preflight),
        )
        .route(
            "/courses/{id}",
            get(courses::get_course)
                .head(courses::method_not_allowed)
                .delete(courses::delete_course)
                .options(courses::preflight),
        )
        .route("/courses/{id}/{*rest}", any(courses::nested_path))
        .fallback(courses::not_found)
        .layer(middleware::from_fn(cors::cors_headers));

    Router::new()
        .route("/health", get(health))
        .nest(API_BASE_PATH, courses)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.ping().await?;
    Ok(StatusCode::OK)
}
