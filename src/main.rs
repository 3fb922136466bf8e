// src/main.rs
use dotenvy::dotenv;
use financial_calculator::{backend, config::Config, database, FinancialCalculator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "financial_calculator=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Opening database {}", config.database_url);

    let pool = database::db::connection::get_db_pool(&config.database_url, config.max_connections).await?;
    database::db::migrate::run_migrations(&pool).await?;

    backend::run_server(&config, FinancialCalculator::new(pool)).await
}
