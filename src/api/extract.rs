//! Request extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::Json,
};

use crate::state::TaskId;
use super::responses::ErrorResponse;

/// Task id taken from the `:id` path segment
pub struct TaskIdParam(pub TaskId);

#[async_trait]
impl<S> FromRequestParts<S> for TaskIdParam
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<u64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(TaskId(id))),
            Err(rejection) => Err((
                rejection.status(),
                Json(ErrorResponse::new(rejection.body_text())),
            )),
        }
    }
}
