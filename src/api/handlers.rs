//! HTTP endpoint handlers for the widget session

use std::sync::Arc;
use axum::{
    extract::State,
    response::Json,
};
use tracing::info;

use crate::state::{AppState, Display, SessionError};
use super::extract::TaskIdParam;
use super::responses::{
    AddTaskRequest, AddTaskResponse, ApiResponse, HealthResponse, StatusResponse,
};

/// Handle POST /api/timer/start - Start the countdown for the selected task
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, SessionError> {
    let display = state.with_widget("start", |widget| {
        widget.start()?;
        Ok(widget.display())
    })?;

    info!("Start endpoint called - timer running");
    Ok(Json(ApiResponse::ok("Timer started", display)))
}

/// Handle POST /api/timer/pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, SessionError> {
    let display = state.with_widget("pause", |widget| {
        widget.pause();
        Ok(widget.display())
    })?;

    info!("Pause endpoint called - timer idle");
    Ok(Json(ApiResponse::ok("Timer paused", display)))
}

/// Handle POST /api/timer/reset - Restore the timer defaults
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, SessionError> {
    let display = state.with_widget("reset", |widget| {
        widget.reset();
        Ok(widget.display())
    })?;

    info!("Reset endpoint called - timer back to defaults");
    Ok(Json(ApiResponse::ok("Timer reset", display)))
}

/// Handle POST /api/tasks - Add a task
pub async fn add_task_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddTaskRequest>,
) -> Result<Json<AddTaskResponse>, SessionError> {
    let (task_id, display) = state.with_widget("add-task", |widget| {
        let id = widget.add_task(&request.text)?;
        Ok((id, widget.display()))
    })?;

    Ok(Json(AddTaskResponse {
        response: ApiResponse::ok("Task added", display),
        task_id,
    }))
}

/// Handle DELETE /api/tasks/:id - Delete a task, unknown ids included
pub async fn delete_task_handler(
    State(state): State<Arc<AppState>>,
    TaskIdParam(id): TaskIdParam,
) -> Result<Json<ApiResponse>, SessionError> {
    let (removed, display) = state.with_widget("delete-task", |widget| {
        let removed = widget.delete_task(id);
        Ok((removed, widget.display()))
    })?;

    let message = if removed { "Task deleted" } else { "No such task, nothing deleted" };
    Ok(Json(ApiResponse::ok(message, display)))
}

/// Handle POST /api/tasks/:id/select - Select the task to work on
pub async fn select_task_handler(
    State(state): State<Arc<AppState>>,
    TaskIdParam(id): TaskIdParam,
) -> Result<Json<ApiResponse>, SessionError> {
    let display = state.with_widget("select-task", |widget| {
        widget.select_task(id)?;
        Ok(widget.display())
    })?;

    Ok(Json(ApiResponse::ok("Task selected", display)))
}

/// Handle GET /api/display - Latest published projection
pub async fn display_handler(State(state): State<Arc<AppState>>) -> Json<Display> {
    Json(state.get_display())
}

/// Handle GET /api/status - Return the full session status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, SessionError> {
    let (display, timer, tasks, selected_task_id) = state.read_widget(|widget| {
        (
            widget.display(),
            widget.timer().clone(),
            widget.tasks().to_vec(),
            widget.selected_id(),
        )
    })?;

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        display,
        timer,
        tasks,
        selected_task_id,
        last_notification: state.get_last_notification(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
