//! Error types shared by the database and the HTTP layer.

use crate::model::{Entity, FilmId, UserId};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: Entity, id: u64 },

    #[error("user {user_id} has not liked film {film_id}")]
    LikeNotFound { film_id: FilmId, user_id: UserId },

    #[error("user {user_id} is already friends with user {friend_id}")]
    AlreadyFriends { user_id: UserId, friend_id: UserId },

    #[error("user {0} cannot be their own friend")]
    SelfFriendship(UserId),

    #[error("invalid {field}: {message}")]
    ValidationFailed { field: &'static str, message: String },
}

/// Coarse classification of [`Error`], stable for callers that map errors to status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidOperation,
    ValidationFailed,
}

impl Error {
    pub fn not_found(entity: Entity, id: u64) -> Self {
        Error::NotFound { entity, id }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Error::ValidationFailed {
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } | Error::LikeNotFound { .. } => ErrorKind::NotFound,
            Error::AlreadyFriends { .. } => ErrorKind::Conflict,
            Error::SelfFriendship(_) => ErrorKind::InvalidOperation,
            Error::ValidationFailed { .. } => ErrorKind::ValidationFailed,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorKind,
    message: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::InvalidOperation | ErrorKind::ValidationFailed => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        })
    }
}
