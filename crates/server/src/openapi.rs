use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct AddRegionRequestDoc {
    pub nombre: String,
}

#[derive(ToSchema, Serialize)]
pub struct AddClienteRequestDoc {
    pub nombre: String,
    pub identificacion: String,
    pub telefono: String,
    pub correo: String,
    #[serde(rename = "regionId")]
    pub region_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::regiones::list,
        crate::routes::regiones::get_by_id,
        crate::routes::regiones::create,
        crate::routes::regiones::update,
        crate::routes::regiones::delete,
        crate::routes::clientes::list,
        crate::routes::clientes::get_by_id,
        crate::routes::clientes::create,
        crate::routes::clientes::update,
        crate::routes::clientes::delete,
    ),
    components(
        schemas(
            HealthResponse,
            AddRegionRequestDoc,
            AddClienteRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "regiones"),
        (name = "clientes")
    )
)]
pub struct ApiDoc;
