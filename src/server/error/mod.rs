//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type returned by services and controllers and implements
//! `IntoResponse` so handlers can propagate it with `?`.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Request body was missing, malformed or did not match the expected shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be deserialized.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Path segment could not be deserialized.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with the current state of a resource.
    ///
    /// Results in 409 Conflict. Used for duplicate names, forbidden state transitions
    /// and exhausted participant limits.
    #[error("{0}")]
    Conflict(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Builds the JSON error body for the given status.
fn error_body(status: StatusCode, reason: &str, message: String) -> Response {
    let name = status
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_uppercase()
        .replace(' ', "_");

    (
        status,
        Json(ErrorDto {
            status: name,
            reason: reason.to_string(),
            message,
            timestamp: Utc::now().naive_utc(),
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and extractor rejections
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => error_body(
                StatusCode::NOT_FOUND,
                "The required object was not found.",
                msg,
            ),
            Self::Conflict(msg) => error_body(
                StatusCode::CONFLICT,
                "Integrity constraint has been violated.",
                msg,
            ),
            Self::BadRequest(msg) => {
                error_body(StatusCode::BAD_REQUEST, "Incorrectly made request.", msg)
            }
            Self::JsonRejection(rejection) => error_body(
                StatusCode::BAD_REQUEST,
                "Incorrectly made request.",
                rejection.body_text(),
            ),
            Self::QueryRejection(rejection) => error_body(
                StatusCode::BAD_REQUEST,
                "Incorrectly made request.",
                rejection.body_text(),
            ),
            Self::PathRejection(rejection) => error_body(
                StatusCode::BAD_REQUEST,
                "Incorrectly made request.",
                rejection.body_text(),
            ),
            Self::InternalError(msg) => {
                InternalServerError(format!("Internal error: {}", msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unexpected server error.",
            "Internal server error".to_string(),
        )
    }
}
