//! HTTP request handlers for the record-management API.
//!
//! Controllers parse path parameters and JSON bodies, convert DTOs to
//! operation parameters, call the service layer, and wrap results in the
//! uniform response envelope.

pub mod donor;
pub mod inventory;
pub mod request;

#[cfg(test)]
mod test;

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// JSON body extractor that keeps rejections inside the response envelope.
///
/// Wraps `axum::Json` so that a missing or mistyped field answers
/// 400 with `{"success": false, "message"}` instead of axum's plain-text
/// rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}
