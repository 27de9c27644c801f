//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so handlers can return `Result<_, AppError>` directly.

pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. All variants use `#[from]` for
/// automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with the error text in the
    /// response envelope.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error binding the listener or serving connections.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Missing or mistyped fields in a JSON request body.
    ///
    /// Results in 400 Bad Request with the rejection text in the response
    /// envelope. Produced by the `ApiJson` extractor.
    #[error(transparent)]
    JsonErr(#[from] JsonRejection),
}

/// Converts application errors into HTTP responses.
///
/// Body rejections map to 400 Bad Request; everything else maps to 500
/// Internal Server Error. Both use the uniform `{"success": false, "message"}`
/// envelope carrying the error text, and are logged server-side.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::JsonErr(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        (
            status,
            Json(ErrorDto {
                success: false,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
