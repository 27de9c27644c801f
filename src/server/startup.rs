use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

use crate::server::{config::Config, error::AppError};

#[cfg(test)]
mod test;

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool to the SQLite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. Startup fails when the database is unreachable; the listener is
/// never started without a working persistence handle.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the static file service for the pre-built front-end bundle.
///
/// Serves files out of the configured static directory, with `index.html` as
/// the fallback for any path that matches no file. Combined with the router's
/// `fallback_service`, this gives every unmatched route the single-page
/// application entry document.
pub fn static_site(config: &Config) -> ServeDir<ServeFile> {
    let index = Path::new(&config.static_dir).join("index.html");

    ServeDir::new(&config.static_dir).fallback(ServeFile::new(index))
}
