use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::region;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub identificacion: String,
    pub telefono: String,
    pub correo: String,
    #[serde(rename = "fechaRegistro")]
    pub fecha_registro: DateTimeWithTimeZone,
    #[serde(rename = "regionId")]
    pub region_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Region,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Region => Entity::belongs_to(region::Entity)
                .from(Column::RegionId)
                .to(region::Column::Id)
                .into(),
        }
    }
}

impl Related<region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a client. `fecha_registro` is stamped here and never touched again;
/// `region_id` may be `None` when the requested region does not exist.
pub async fn create(
    db: &DatabaseConnection,
    nombre: &str,
    identificacion: &str,
    telefono: &str,
    correo: &str,
    region_id: Option<i32>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        nombre: Set(nombre.to_string()),
        identificacion: Set(identificacion.to_string()),
        telefono: Set(telefono.to_string()),
        correo: Set(correo.to_string()),
        fecha_registro: Set(Utc::now().into()),
        region_id: Set(region_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
