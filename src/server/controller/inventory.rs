use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeleteResponseDto, ErrorDto},
        inventory::{BloodUnitDto, CreateBloodUnitDto, CreateBloodUnitResponseDto},
    },
    server::{
        controller::ApiJson, error::AppError, model::inventory::CreateBloodUnitParams,
        service::inventory::InventoryService, state::AppState,
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

/// List all inventory units.
///
/// Returns every recorded unit, most recently recorded first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Array of blood units
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "All units, newest first", body = Vec<BloodUnitDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = InventoryService::new(&state.db);

    let units = service.get_all().await?;
    let units: Vec<BloodUnitDto> = units.into_iter().map(|unit| unit.into_dto()).collect();

    Ok((StatusCode::OK, Json(units)))
}

/// Record a newly collected unit.
///
/// Computes the expiry date (collection date plus 35 days), persists the unit
/// with status `Available`, then refreshes the referenced donor's
/// last-donation date. The refresh outcome is reported in `donorUpdated`; a
/// missing donor or failed refresh never fails the unit creation.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Blood type, donor reference, and collection date
///
/// # Returns
/// - `201 Created` - Unit recorded
/// - `400 Bad Request` - Missing or mistyped fields in the body
/// - `500 Internal Server Error` - Database error inserting the unit
#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    request_body = CreateBloodUnitDto,
    responses(
        (status = 201, description = "Unit recorded", body = CreateBloodUnitResponseDto),
        (status = 400, description = "Invalid unit data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_blood_unit(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateBloodUnitDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = InventoryService::new(&state.db);

    let params = CreateBloodUnitParams::from_dto(payload);

    let recorded = service.record_unit(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBloodUnitResponseDto {
            success: true,
            blood_unit: recorded.unit.into_dto(),
            donor_updated: recorded.donor_updated,
        }),
    ))
}

/// Delete an inventory unit by ID.
///
/// Removes the unit if it exists. A nonexistent ID still reports success;
/// the delete is not checked for a match.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Unit ID to delete
///
/// # Returns
/// - `200 OK` - Delete acknowledged
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    tag = INVENTORY_TAG,
    params(
        ("id" = i32, Path, description = "Blood unit ID")
    ),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeleteResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_blood_unit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = InventoryService::new(&state.db);

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResponseDto {
            success: true,
            message: "Blood unit deleted".to_string(),
        }),
    ))
}
