use std::collections::BTreeMap;

use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("unauthorized")]
    Unauthorized,

    // infra things
    #[error("storage backend not configured")]
    ServiceUnavailable,
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), message.to_string());
        AppError::Validation(errors)
    }

    fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("record already exists".to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                AppError::validation("seminar", "unknown seminar")
            }
            _ => match err {
                DbErr::RecordNotFound(message) => AppError::NotFound(message),
                other => AppError::Db(other),
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // duplicate upserts are a request problem, not a state the
            // client can resolve, so conflicts answer 400 as well
            Self::Validation(_) | Self::BadRequest(_) | Self::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(fields) => json!({ "error": fields }),
            Self::Db(_) | Self::Internal(_) => {
                log::error!("request failed: {self}");
                if crate::config::debug_enabled() {
                    json!({ "error": self.to_string() })
                } else {
                    json!({ "error": "Internal Server Error" })
                }
            }
            other => json!({ "error": other.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Malformed JSON bodies answer with the same envelope the rest of the
/// API uses instead of actix's plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = json!({ "error": err.to_string() });
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// A path segment that does not parse as an id cannot name a record.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let body = json!({ "error": "not found" });
    InternalError::from_response(err, HttpResponse::NotFound().json(body)).into()
}
