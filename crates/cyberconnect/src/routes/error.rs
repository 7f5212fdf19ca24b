use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::ApiResponse;
use crate::data_storage::DataStorageError;
use crate::feed::FeedError;

#[derive(Debug, thiserror::Error)]
pub enum FeedRouteError {
    #[error("Invalid post ID: {0}")]
    InvalidId(String),
    #[error("Post not found: {0}")]
    PostNotFound(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("No snapshot stored under {0}")]
    SnapshotMissing(String),
    #[error("Storage error: {0}")]
    Storage(#[from] DataStorageError),
}

impl From<FeedError> for FeedRouteError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::UnknownPost(id) => FeedRouteError::PostNotFound(id.to_string()),
        }
    }
}

impl IntoResponse for FeedRouteError {
    fn into_response(self) -> Response {
        match self {
            FeedRouteError::InvalidId(id) => {
                (StatusCode::BAD_REQUEST, Json(ApiResponse::error(format!("Invalid post ID: {}", id)))).into_response()
            }
            FeedRouteError::PostNotFound(id) => {
                (StatusCode::NOT_FOUND, Json(ApiResponse::error(format!("Post not found: {}", id)))).into_response()
            }
            FeedRouteError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, Json(ApiResponse::error("Invalid username or password".to_string())))
                    .into_response()
            }
            FeedRouteError::SnapshotMissing(key) => {
                (StatusCode::NOT_FOUND, Json(ApiResponse::error(format!("No snapshot stored under {}", key))))
                    .into_response()
            }
            FeedRouteError::Storage(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiResponse::error(format!("Storage error: {}", err))))
                    .into_response()
            }
        }
    }
}
