use sqlx::{Pool, Sqlite};

/// Creates the `financial_data` table if it is absent.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
