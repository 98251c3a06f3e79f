//! API response structures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::state::{CycleCompleted, Display, SessionError, Task, TaskId, TimerState, WidgetError};

/// API response structure for widget commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub display: Display,
}

impl ApiResponse {
    /// Create a successful command response
    pub fn ok(message: impl Into<String>, display: Display) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            timestamp: Utc::now(),
            display,
        }
    }
}

/// Response to a rejected command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = match &self {
            SessionError::Widget(WidgetError::NoTaskSelected) => StatusCode::CONFLICT,
            SessionError::Widget(WidgetError::EmptyTaskText) => StatusCode::UNPROCESSABLE_ENTITY,
            SessionError::Widget(WidgetError::UnknownTask(_)) => StatusCode::NOT_FOUND,
            SessionError::StateUnavailable(e) => {
                error!("Widget state unavailable: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Request body for adding a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
}

/// Response for a newly added task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTaskResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    pub task_id: TaskId,
}

/// Full session status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub display: Display,
    pub timer: TimerState,
    pub tasks: Vec<Task>,
    pub selected_task_id: Option<TaskId>,
    pub last_notification: Option<CycleCompleted>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
