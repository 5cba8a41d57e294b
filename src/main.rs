mod config;
mod database;
mod models;
mod seeds;
mod services;
mod utils;

use dotenv::dotenv;
use std::error::Error;

use config::SeedConfig;
use database::MongoDB;
use seeds::test_users_seed::{credentials_banner, seed_test_users};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Configuração validada antes de qualquer acesso ao banco
    let config = SeedConfig::from_env()?;

    log::info!("🌱 Seeding test users into database: {}", config.db_name);

    let db = MongoDB::connect(&config).await?;
    log::info!("✅ MongoDB connected successfully");

    let report = seed_test_users(&db, config.bcrypt_cost).await?;
    log::info!(
        "📋 Test users: {} created, {} already present",
        report.created(),
        report.skipped()
    );

    print!("{}", credentials_banner());

    db.shutdown().await;

    Ok(())
}
