//! Controller layer adapting HTTP requests to service calls.
//!
//! Handlers extract validated request data, invoke the corresponding service
//! operation, and wrap the outcome in the response envelope. No business
//! logic lives here; errors propagate to [`ApiError`]'s response mapping.

use super::envelope::ApiResponse;
use super::error::ApiError;
use super::requests::{CreateTaskBody, ListTasksQuery, UpdateTaskBody, parse_task_id};
use super::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, Uri};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::task::domain::Task;
use crate::task::services::PageInfo;

/// Listing payload: one page of tasks plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct TaskListBody {
    /// Records within the page window, newest first.
    pub data: Vec<Task>,
    /// Window description and full filtered count.
    pub pagination: PageInfo,
}

/// Liveness payload reported by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthBody {
    /// Always `true` when the process can answer at all.
    pub success: bool,
    /// Fixed liveness message.
    pub message: String,
    /// Current wall-clock time.
    pub timestamp: String,
    /// Seconds since process start.
    pub uptime: u64,
    /// Runtime environment label.
    pub environment: String,
}

/// `POST /api/tasks`
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Task>>), ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let request = body.validate()?;
    let task = state.service.create_task(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Task created successfully", task)),
    ))
}

/// `GET /api/tasks`
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<ApiResponse<TaskListBody>>, ApiError> {
    let request = query.validate()?;
    let listing = state.service.get_all_tasks(request).await?;
    Ok(Json(ApiResponse::ok(
        "Tasks retrieved successfully",
        TaskListBody {
            data: listing.tasks,
            pagination: listing.pagination,
        },
    )))
}

/// `GET /api/tasks/{id}`
pub async fn get_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let id = parse_task_id(&raw_id)?;
    let task = state.service.get_task_by_id(id).await?;
    Ok(Json(ApiResponse::ok("Task retrieved successfully", task)))
}

/// `PUT /api/tasks/{id}` and `PATCH /api/tasks/{id}`
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let id = parse_task_id(&raw_id)?;
    let Json(body) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let request = body.validate()?;
    let task = state.service.update_task(id, request).await?;
    Ok(Json(ApiResponse::ok("Task updated successfully", task)))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let id = parse_task_id(&raw_id)?;
    state.service.delete_task(id).await?;
    Ok(Json(ApiResponse::ok_message("Task deleted successfully")))
}

/// `GET /health`
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        success: true,
        message: "Server is running".to_owned(),
        timestamp: Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs(),
        environment: state.environment,
    })
}

/// `GET /api` — index of the exposed operations.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn api_index() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Task Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "tasks": {
                "create": "POST /api/tasks",
                "list": "GET /api/tasks",
                "get": "GET /api/tasks/{id}",
                "update": "PUT /api/tasks/{id}",
                "delete": "DELETE /api/tasks/{id}",
            },
        },
    }))
}

/// Fallback for requests matching no route; distinct from a missing task.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_owned(),
    }
}
