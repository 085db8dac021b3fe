use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use service::region_service;
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct AddRegionRequest {
    pub nombre: String,
}

#[utoipa::path(
    get, path = "/api/v1/regiones", tag = "regiones",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::region::Model>>, JsonApiError> {
    match region_service::list_regiones(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list regiones");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string()))),
    }
}

#[utoipa::path(
    get, path = "/api/v1/regiones/{id}", tag = "regiones",
    params(("id" = i32, Path, description = "Region id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::region::Model>, StatusCode> {
    match region_service::get_region(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    post, path = "/api/v1/regiones", tag = "regiones",
    request_body = crate::openapi::AddRegionRequestDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<AddRegionRequest>,
) -> Result<(StatusCode, Json<models::region::Model>), JsonApiError> {
    match region_service::create_region(&state.db, &input.nombre).await {
        Ok(m) => {
            info!(id = m.id, nombre = %m.nombre, "created region");
            Ok((StatusCode::CREATED, Json(m)))
        }
        Err(e) => {
            error!(err = %e, "create region failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    put, path = "/api/v1/regiones/{id}", tag = "regiones",
    params(("id" = i32, Path, description = "Region id")),
    request_body = crate::openapi::AddRegionRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<AddRegionRequest>,
) -> Result<Json<models::region::Model>, JsonApiError> {
    match region_service::update_region(&state.db, id, &input.nombre).await {
        Ok(m) => {
            info!(id = m.id, "updated region");
            Ok(Json(m))
        }
        Err(service::errors::ServiceError::NotFound(msg)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)))
        }
        Err(e) => {
            error!(err = %e, "update region failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    delete, path = "/api/v1/regiones/{id}", tag = "regiones",
    params(("id" = i32, Path, description = "Region id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> StatusCode {
    match region_service::delete_region(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted region");
            StatusCode::OK
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!(err = %e, "delete region failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
