use crate::db;
use anyhow::Result;

#[tokio::test]
async fn connect_and_ping() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let conn = db::connect().await?;
    conn.ping().await?;
    Ok(())
}

#[tokio::test]
async fn connect_with_pool_config() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let cfg = configs::DatabaseConfig {
        url: db::DATABASE_URL.clone(),
        max_connections: 5,
        min_connections: 1,
        connect_timeout_secs: 10,
        idle_timeout_secs: 60,
        max_lifetime_secs: 600,
        acquire_timeout_secs: 10,
        sqlx_logging: false,
    };
    cfg.validate()?;
    let conn = db::connect_with(&cfg).await?;
    conn.ping().await?;
    Ok(())
}
