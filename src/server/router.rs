use axum::{
    routing::{delete, get, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{DeleteResponseDto, ErrorDto},
        donor::{CreateDonorDto, CreateDonorResponseDto, DonorDto},
        inventory::{BloodUnitDto, CreateBloodUnitDto, CreateBloodUnitResponseDto, UnitStatus},
        request::{
            BloodRequestDto, CreateBloodRequestDto, CreateBloodRequestResponseDto,
            RequestPriority, RequestStatus, UpdateBloodRequestDto, UpdateBloodRequestResponseDto,
        },
    },
    server::{
        controller::{
            donor::{create_donor, delete_donor, get_donors},
            inventory::{create_blood_unit, delete_blood_unit, get_inventory},
            request::{create_request, delete_request, get_requests, update_request},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::donor::get_donors,
        crate::server::controller::donor::create_donor,
        crate::server::controller::donor::delete_donor,
        crate::server::controller::inventory::get_inventory,
        crate::server::controller::inventory::create_blood_unit,
        crate::server::controller::inventory::delete_blood_unit,
        crate::server::controller::request::get_requests,
        crate::server::controller::request::create_request,
        crate::server::controller::request::update_request,
        crate::server::controller::request::delete_request,
    ),
    components(schemas(
        ErrorDto,
        DeleteResponseDto,
        DonorDto,
        CreateDonorDto,
        CreateDonorResponseDto,
        BloodUnitDto,
        CreateBloodUnitDto,
        CreateBloodUnitResponseDto,
        UnitStatus,
        BloodRequestDto,
        CreateBloodRequestDto,
        CreateBloodRequestResponseDto,
        UpdateBloodRequestDto,
        UpdateBloodRequestResponseDto,
        RequestPriority,
        RequestStatus,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/donors", get(get_donors).post(create_donor))
        .route("/api/donors/{id}", delete(delete_donor))
        .route("/api/inventory", get(get_inventory).post(create_blood_unit))
        .route("/api/inventory/{id}", delete(delete_blood_unit))
        .route("/api/requests", get(get_requests).post(create_request))
        .route(
            "/api/requests/{id}",
            put(update_request).delete(delete_request),
        )
        .route("/api-docs/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
