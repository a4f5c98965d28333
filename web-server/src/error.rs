// web-server/src/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use common::AuthError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every failed auth API call
#[derive(Debug, Serialize, Deserialize)]
pub struct FailureBody {
    pub success: bool,
    pub errormessage: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Auth(e) => HttpResponse::build(self.status_code()).json(FailureBody {
                success: false,
                errormessage: e.public_message().to_string(),
            }),
            ApiError::Render(e) => {
                tracing::error!("Template rendering failed: {}", e);
                HttpResponse::InternalServerError().body("Internal server error")
            }
        }
    }
}
