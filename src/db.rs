use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DEMO_SEED: &str = include_str!("../data/seed/demo.sql");

pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(8)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Load the demo tenants and their data into an empty database.
pub async fn seed_demo(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tenants").fetch_one(pool).await?;
    if existing > 0 {
        log::info!("Skipping demo seed: {existing} tenant(s) already present");
        return Ok(false);
    }
    sqlx::raw_sql(DEMO_SEED).execute(pool).await?;
    log::info!("Demo data seeded");
    Ok(true)
}
