use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

use crate::config::Config;

/// Establish the connection the adapter runs every query through.
///
/// Pool sizing and timeouts are left at the driver defaults.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(config.database_url.as_str());
    opts.sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opts).await?;
    tracing::info!(backend = ?db.get_database_backend(), "Database connected");
    Ok(db)
}

/// Create the `users`, `accounts`, `sessions` and `verification_tokens` tables
/// if they are not already present.
///
/// # Errors
///
/// Returns an error if any table or index cannot be created.
pub async fn install_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;
    tracing::info!("Auth tables installed");
    Ok(())
}
