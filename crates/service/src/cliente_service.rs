use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;
use models::{cliente, region};

/// A client paired with its resolved region, as served outward.
pub type ClienteConRegion = (cliente::Model, Option<region::Model>);

/// List all clients, each joined with its region.
pub async fn list_clientes(db: &DatabaseConnection) -> Result<Vec<ClienteConRegion>, ServiceError> {
    cliente::Entity::find()
        .find_also_related(region::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get a client by id, joined with its region.
pub async fn get_cliente(db: &DatabaseConnection, id: i32) -> Result<Option<ClienteConRegion>, ServiceError> {
    cliente::Entity::find_by_id(id)
        .find_also_related(region::Entity)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a client. The region is resolved by id before the write; a
/// dangling `region_id` is accepted and stored as NULL.
pub async fn create_cliente(
    db: &DatabaseConnection,
    nombre: &str,
    identificacion: &str,
    telefono: &str,
    correo: &str,
    region_id: i32,
) -> Result<ClienteConRegion, ServiceError> {
    let region = resolve_region(db, region_id).await?;
    let created = cliente::create(db, nombre, identificacion, telefono, correo, region.as_ref().map(|r| r.id)).await?;
    Ok((created, region))
}

/// Replace all mutable fields of a client. `fecha_registro` is left as
/// written at creation. Fails with `NotFound` when the id is absent.
pub async fn update_cliente(
    db: &DatabaseConnection,
    id: i32,
    nombre: &str,
    identificacion: &str,
    telefono: &str,
    correo: &str,
    region_id: i32,
) -> Result<ClienteConRegion, ServiceError> {
    let region = resolve_region(db, region_id).await?;
    let mut am: cliente::ActiveModel = cliente::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("cliente"))?
        .into();
    am.nombre = Set(nombre.to_string());
    am.identificacion = Set(identificacion.to_string());
    am.telefono = Set(telefono.to_string());
    am.correo = Set(correo.to_string());
    am.region_id = Set(region.as_ref().map(|r| r.id));
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok((updated, region))
}

/// Delete a client. Returns whether a row was actually removed.
pub async fn delete_cliente(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = cliente::Entity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

async fn resolve_region(db: &DatabaseConnection, region_id: i32) -> Result<Option<region::Model>, ServiceError> {
    region::Entity::find_by_id(region_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region_service;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn cliente_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let r = region_service::create_region(&db, "Central").await?;
        let (c, cr) = create_cliente(&db, "Ana", "1-1111-1111", "8888-1234", "ana@example.com", r.id).await?;
        assert_eq!(c.region_id, Some(r.id));
        assert_eq!(cr.as_ref().map(|x| x.id), Some(r.id));

        let (found, found_region) = get_cliente(&db, c.id).await?.unwrap();
        assert_eq!(found.id, c.id);
        assert_eq!(found_region.map(|x| x.nombre), Some("Central".to_string()));

        // Full replace leaves id and fecha_registro alone
        let (updated, _) = update_cliente(&db, c.id, "Ana Maria", "1-1111-1111", "8888-0000", "ana@example.com", r.id).await?;
        assert_eq!(updated.id, c.id);
        assert_eq!(updated.telefono, "8888-0000");
        assert_eq!(updated.fecha_registro, c.fecha_registro);

        assert!(delete_cliente(&db, c.id).await?);
        assert!(get_cliente(&db, c.id).await?.is_none());

        region_service::delete_region(&db, r.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn dangling_region_is_stored_as_null() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let (c, cr) = create_cliente(&db, "Luis", "2-2222-2222", "7777-0000", "luis@example.com", i32::MAX).await?;
        assert_eq!(c.region_id, None);
        assert!(cr.is_none());

        // Same contract on update
        let (updated, ur) = update_cliente(&db, c.id, "Luis", "2-2222-2222", "7777-0000", "luis@example.com", i32::MAX - 1).await?;
        assert_eq!(updated.region_id, None);
        assert!(ur.is_none());

        delete_cliente(&db, c.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_cliente_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let err = update_cliente(&db, i32::MAX, "x", "x", "x", "x", 1).await.unwrap_err();
        assert!(matches!(err, crate::errors::ServiceError::NotFound(_)));

        assert!(!delete_cliente(&db, i32::MAX).await?);
        Ok(())
    }
}
