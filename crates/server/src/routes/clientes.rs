use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use service::cliente_service;
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::ServerState;
use models::{cliente, region};

#[derive(Debug, Deserialize, Serialize)]
pub struct AddClienteRequest {
    pub nombre: String,
    pub identificacion: String,
    pub telefono: String,
    pub correo: String,
    #[serde(rename = "regionId")]
    pub region_id: i32,
}

/// Outward shape of a client: the region is embedded as a full object
/// (or `null` when the reference is dangling), never as a bare id.
#[derive(Debug, Serialize)]
pub struct ClienteResponse {
    pub id: i32,
    pub nombre: String,
    pub identificacion: String,
    pub telefono: String,
    pub correo: String,
    #[serde(rename = "fechaRegistro")]
    pub fecha_registro: DateTime<FixedOffset>,
    pub region: Option<region::Model>,
}

impl From<(cliente::Model, Option<region::Model>)> for ClienteResponse {
    fn from((c, r): (cliente::Model, Option<region::Model>)) -> Self {
        Self {
            id: c.id,
            nombre: c.nombre,
            identificacion: c.identificacion,
            telefono: c.telefono,
            correo: c.correo,
            fecha_registro: c.fecha_registro,
            region: r,
        }
    }
}

#[utoipa::path(
    get, path = "/api/v1/clientes", tag = "clientes",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ClienteResponse>>, JsonApiError> {
    match cliente_service::list_clientes(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list clientes");
            Ok(Json(list.into_iter().map(ClienteResponse::from).collect()))
        }
        Err(e) => Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string()))),
    }
}

#[utoipa::path(
    get, path = "/api/v1/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<ClienteResponse>, StatusCode> {
    match cliente_service::get_cliente(&state.db, id).await {
        Ok(Some(pair)) => Ok(Json(pair.into())),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[utoipa::path(
    post, path = "/api/v1/clientes", tag = "clientes",
    request_body = crate::openapi::AddClienteRequestDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<AddClienteRequest>,
) -> Result<(StatusCode, Json<ClienteResponse>), JsonApiError> {
    match cliente_service::create_cliente(
        &state.db,
        &input.nombre,
        &input.identificacion,
        &input.telefono,
        &input.correo,
        input.region_id,
    )
    .await
    {
        Ok(pair) => {
            info!(id = pair.0.id, region_id = ?pair.0.region_id, "created cliente");
            Ok((StatusCode::CREATED, Json(pair.into())))
        }
        Err(e) => {
            error!(err = %e, "create cliente failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    put, path = "/api/v1/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente id")),
    request_body = crate::openapi::AddClienteRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<AddClienteRequest>,
) -> Result<Json<ClienteResponse>, JsonApiError> {
    match cliente_service::update_cliente(
        &state.db,
        id,
        &input.nombre,
        &input.identificacion,
        &input.telefono,
        &input.correo,
        input.region_id,
    )
    .await
    {
        Ok(pair) => {
            info!(id = pair.0.id, "updated cliente");
            Ok(Json(pair.into()))
        }
        Err(service::errors::ServiceError::NotFound(msg)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)))
        }
        Err(e) => {
            error!(err = %e, "update cliente failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    delete, path = "/api/v1/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> StatusCode {
    match cliente_service::delete_cliente(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted cliente");
            StatusCode::OK
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!(err = %e, "delete cliente failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
