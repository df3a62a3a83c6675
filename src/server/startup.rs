use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config, error::AppError, model::user::CreateUserParam, service::auth::AuthService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured admin account if it does not exist yet.
///
/// Does nothing when no account is configured. An existing account keeps its
/// current password.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the optional admin account
///
/// # Returns
/// - `Ok(())` - Account present or not configured
/// - `Err(AppError)` - Database or hashing error
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin) = &config.admin else {
        tracing::info!("No admin account configured, skipping bootstrap");
        return Ok(());
    };

    let created = AuthService::new(db, config.token_ttl)
        .ensure_user(CreateUserParam {
            username: admin.username.clone(),
            password: admin.password.clone(),
        })
        .await?;

    if created {
        tracing::info!("Created admin account '{}'", admin.username);
    } else {
        tracing::info!("Admin account '{}' already exists", admin.username);
    }

    Ok(())
}

/// CORS layer accepting any origin, method and header.
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
