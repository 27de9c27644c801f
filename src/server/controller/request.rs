use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResponseDto, ErrorDto},
        request::{
            BloodRequestDto, CreateBloodRequestDto, CreateBloodRequestResponseDto,
            UpdateBloodRequestDto, UpdateBloodRequestResponseDto,
        },
    },
    server::{
        controller::ApiJson,
        error::AppError,
        model::request::{CreateBloodRequestParams, UpdateBloodRequestParams},
        service::request::RequestService,
        state::AppState,
    },
};

/// Tag for grouping request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

/// List all blood requests.
///
/// Returns every submitted request, most recently submitted first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Array of blood requests
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/requests",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "All requests, newest first", body = Vec<BloodRequestDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_requests(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db);

    let requests = service.get_all().await?;
    let requests: Vec<BloodRequestDto> = requests
        .into_iter()
        .map(|request| request.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(requests)))
}

/// Submit a new blood request.
///
/// Persists the request and returns it with the generated identifier and
/// request timestamp. Status defaults to `Pending` when omitted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Blood request data
///
/// # Returns
/// - `201 Created` - Request submitted
/// - `400 Bad Request` - Missing or mistyped fields in the body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = REQUEST_TAG,
    request_body = CreateBloodRequestDto,
    responses(
        (status = 201, description = "Request submitted", body = CreateBloodRequestResponseDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateBloodRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db);

    let params = CreateBloodRequestParams::from_dto(payload);

    let request = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBloodRequestResponseDto {
            success: true,
            request: request.into_dto(),
        }),
    ))
}

/// Update a blood request.
///
/// Applies a partial or full update to the request identified by the path
/// parameter and returns the post-update record. When no request matches the
/// ID the envelope still reports success with a null `request`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Request ID to update
/// - `payload` - Fields to replace; omitted fields are left untouched
///
/// # Returns
/// - `200 OK` - Post-update request, or null when no match
/// - `400 Bad Request` - Mistyped fields in the body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/requests/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Blood request ID")
    ),
    request_body = UpdateBloodRequestDto,
    responses(
        (status = 200, description = "Post-update request, null when no match", body = UpdateBloodRequestResponseDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateBloodRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db);

    let params = UpdateBloodRequestParams::from_dto(payload);

    let request = service.update(id, params).await?;

    Ok((
        StatusCode::OK,
        Json(UpdateBloodRequestResponseDto {
            success: true,
            request: request.map(|request| request.into_dto()),
        }),
    ))
}

/// Delete a blood request by ID.
///
/// Removes the request if it exists. A nonexistent ID still reports success;
/// the delete is not checked for a match.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Request ID to delete
///
/// # Returns
/// - `200 OK` - Delete acknowledged
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/requests/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Blood request ID")
    ),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeleteResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RequestService::new(&state.db);

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResponseDto {
            success: true,
            message: "Blood request deleted".to_string(),
        }),
    ))
}
