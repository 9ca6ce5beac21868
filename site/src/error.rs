use std::sync::Arc;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Unexpected upstream payload: {0}")]
    UpstreamShape(&'static str),

    #[error("Sign in required")]
    Unauthorized,

    #[error("Invalid feedback: {0}")]
    InvalidFeedback(&'static str),

    /// Failure of a cache fill that other waiting requests share.
    #[error("{0}")]
    Shared(Arc<ApiError>),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Upstream(_) | ApiError::UpstreamShape(_) => StatusCode::BAD_GATEWAY,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidFeedback(_) => StatusCode::BAD_REQUEST,
            ApiError::Shared(inner) => inner.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::BAD_GATEWAY {
            log::error!("{self}");
        }
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
