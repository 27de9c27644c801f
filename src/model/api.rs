use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned on all failed API calls.
///
/// `success` is always `false`; `message` carries the error text.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
}

/// Envelope returned by delete endpoints.
///
/// Deleting an identifier that does not exist still reports success; the
/// underlying delete-by-id is not checked for a match.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponseDto {
    pub success: bool,
    pub message: String,
}
