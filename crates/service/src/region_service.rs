use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::ServiceError;
use models::{cliente, region};

/// List all regions in storage order.
pub async fn list_regiones(db: &DatabaseConnection) -> Result<Vec<region::Model>, ServiceError> {
    region::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get region by id.
pub async fn get_region(db: &DatabaseConnection, id: i32) -> Result<Option<region::Model>, ServiceError> {
    Ok(region::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Create a region.
pub async fn create_region(db: &DatabaseConnection, nombre: &str) -> Result<region::Model, ServiceError> {
    let created = region::create(db, nombre).await?;
    Ok(created)
}

/// Update the region name. Fails with `NotFound` when the id is absent.
pub async fn update_region(db: &DatabaseConnection, id: i32, nombre: &str) -> Result<region::Model, ServiceError> {
    let mut am: region::ActiveModel = region::Entity::find_by_id(id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("region"))?
        .into();
    am.nombre = Set(nombre.to_string());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a region. Returns whether a row was actually removed.
pub async fn delete_region(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = region::Entity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// Derived back-reference: all clients currently pointing at the region.
/// Informational only; never serialized into region responses.
pub async fn clientes_in_region(db: &DatabaseConnection, region_id: i32) -> Result<Vec<cliente::Model>, ServiceError> {
    cliente::Entity::find()
        .filter(cliente::Column::RegionId.eq(region_id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn region_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let r = create_region(&db, "Central").await?;
        assert_eq!(r.nombre, "Central");

        let found = get_region(&db, r.id).await?.unwrap();
        assert_eq!(found.id, r.id);
        assert_eq!(found.nombre, "Central");

        let updated = update_region(&db, r.id, "Central Norte").await?;
        assert_eq!(updated.id, r.id);
        assert_eq!(updated.nombre, "Central Norte");

        assert!(delete_region(&db, r.id).await?);
        let after = get_region(&db, r.id).await?;
        assert!(after.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_region_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let err = update_region(&db, i32::MAX, "nope").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        // Delete of a missing id is reported, not an error
        assert!(!delete_region(&db, i32::MAX).await?);
        Ok(())
    }

    #[tokio::test]
    async fn derived_back_reference_lists_clients() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let r = create_region(&db, "Sur").await?;
        let c1 = models::cliente::create(&db, "A", "1", "2", "a@x.com", Some(r.id)).await?;
        let c2 = models::cliente::create(&db, "B", "3", "4", "b@x.com", Some(r.id)).await?;

        let members = clientes_in_region(&db, r.id).await?;
        let ids: Vec<i32> = members.iter().map(|c| c.id).collect();
        assert!(ids.contains(&c1.id));
        assert!(ids.contains(&c2.id));

        models::cliente::Entity::delete_by_id(c1.id).exec(&db).await?;
        models::cliente::Entity::delete_by_id(c2.id).exec(&db).await?;
        delete_region(&db, r.id).await?;
        Ok(())
    }
}
