use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum BlogError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Invalid post id: {0}")]
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Post {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Tags codec error: {0}")]
    TagsCodec(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Invalid listen address: {0}")]
    InvalidListenAddr(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for BlogError {
    fn from(e: figment::Error) -> Self {
        BlogError::Config(Box::new(e))
    }
}

impl BlogError {
    pub fn status(&self) -> StatusCode {
        match self {
            BlogError::MissingRequiredField(_)
            | BlogError::InvalidId(_)
            | BlogError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            BlogError::NotFound(_) => StatusCode::NOT_FOUND,
            BlogError::Database(_)
            | BlogError::TagsCodec(_)
            | BlogError::Config(_)
            | BlogError::InvalidListenAddr(_)
            | BlogError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_body = match &self {
            BlogError::MissingRequiredField(_) => ApiErrorBody {
                code: "MISSING_FIELD".to_string(),
                message: self.to_string(),
            },
            BlogError::InvalidId(_) => ApiErrorBody {
                code: "INVALID_ID".to_string(),
                message: self.to_string(),
            },
            BlogError::InvalidBody(_) => ApiErrorBody {
                code: "INVALID_BODY".to_string(),
                message: self.to_string(),
            },
            BlogError::NotFound(_) => ApiErrorBody {
                code: "NOT_FOUND".to_string(),
                message: self.to_string(),
            },
            BlogError::Database(_)
            | BlogError::TagsCodec(_)
            | BlogError::Config(_)
            | BlogError::InvalidListenAddr(_)
            | BlogError::Io(_) => {
                // cause stays in the log, never in the response
                error!(error = %self, "request failed with internal error");
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                }
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
