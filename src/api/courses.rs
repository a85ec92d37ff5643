use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::models::{Course, CreatedCourse};
use crate::state::AppState;

pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.store.list().await?;
    Ok(Json(courses))
}

pub async fn create_course(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedCourse>), AppError> {
    let course: Course = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid course body: {}", e)))?;

    let course_id = state
        .store
        .insert(&course)
        .await
        .map_err(|e| AppError::BadRequest(format!("insert failed: {}", e)))?;

    Ok((StatusCode::CREATED, Json(CreatedCourse { course_id })))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let id = parse_id(&id)?;
    let course = state.store.get(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::OK)
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

// `get` would otherwise answer HEAD too.
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Anything below `/courses/{id}`.
pub async fn nested_path() -> AppError {
    AppError::BadRequest("too many path segments".to_string())
}

// A non-numeric id names no course, so it is reported as 404 rather than 400.
fn parse_id(segment: &str) -> Result<i64, AppError> {
    segment.parse().map_err(|_| AppError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert_eq!(parse_id("-3").unwrap(), -3);
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound)));
        assert!(matches!(parse_id(""), Err(AppError::NotFound)));
        assert!(matches!(parse_id("1.5"), Err(AppError::NotFound)));
    }
}
