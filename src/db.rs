use crate::config::CampConfig;
use anyhow::{Context, Result};
use sqlx::migrate::{MigrateDatabase, Migrator};
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Opens the pool described by `config`, creating the database file if needed and
/// applying pending migrations unless they are disabled.
pub async fn connect(config: &CampConfig) -> Result<SqlitePool> {
    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        tracing::info!(
            "Unable to find database at {}, creating...",
            config.database_url
        );
        Sqlite::create_database(&config.database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", config.database_url))?;
        tracing::info!("Successfully created database at {}.", config.database_url);
    }

    // cascading deletes of signups rely on foreign keys being enforced on every connection
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid database url {}", config.database_url))?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

    if config.run_migrations {
        MIGRATOR
            .run(&pool)
            .await
            .context("Failed to run database migrations.")?;
        tracing::info!("Database migrations applied.");
    } else {
        tracing::info!("Skipping migrations (RUN_MIGRATIONS=false).");
    }

    Ok(pool)
}
