use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResponseDto, ErrorDto},
        donor::{CreateDonorDto, CreateDonorResponseDto, DonorDto},
    },
    server::{
        controller::ApiJson, error::AppError, model::donor::CreateDonorParams,
        service::donor::DonorService, state::AppState,
    },
};

/// Tag for grouping donor endpoints in OpenAPI documentation
pub static DONOR_TAG: &str = "donor";

/// List all donors.
///
/// Returns every registered donor, most recently registered first. No
/// pagination or filtering.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Array of donors
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/donors",
    tag = DONOR_TAG,
    responses(
        (status = 200, description = "All donors, newest first", body = Vec<DonorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DonorService::new(&state.db);

    let donors = service.get_all().await?;
    let donors: Vec<DonorDto> = donors.into_iter().map(|donor| donor.into_dto()).collect();

    Ok((StatusCode::OK, Json(donors)))
}

/// Register a new donor.
///
/// Persists the donor record and returns it with the generated identifier and
/// creation timestamp.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Donor registration data
///
/// # Returns
/// - `201 Created` - Successfully registered donor
/// - `400 Bad Request` - Missing or mistyped fields in the body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/donors",
    tag = DONOR_TAG,
    request_body = CreateDonorDto,
    responses(
        (status = 201, description = "Successfully registered donor", body = CreateDonorResponseDto),
        (status = 400, description = "Invalid donor data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_donor(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateDonorDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DonorService::new(&state.db);

    let params = CreateDonorParams::from_dto(payload);

    let donor = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateDonorResponseDto {
            success: true,
            donor: donor.into_dto(),
        }),
    ))
}

/// Delete a donor by ID.
///
/// Removes the donor if it exists. A nonexistent ID still reports success;
/// the delete is not checked for a match.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Donor ID to delete
///
/// # Returns
/// - `200 OK` - Delete acknowledged
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(
        ("id" = i32, Path, description = "Donor ID")
    ),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeleteResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_donor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DonorService::new(&state.db);

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResponseDto {
            success: true,
            message: "Donor deleted".to_string(),
        }),
    ))
}
