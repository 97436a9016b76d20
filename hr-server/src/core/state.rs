//! Server State
//!
//! [`ServerState`] holds the shared services every request can reach: the
//! database pool and the JWT service. `Arc` keeps clones cheap; Axum clones
//! the state per request.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::{Config, ServerError};
use crate::db::{self, DbService};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize all services from configuration.
    ///
    /// Opens the database (applying migrations), runs the first-run seed
    /// when seed credentials are configured, and loads the JWT setup.
    pub async fn initialize(config: &Config) -> Result<Self, ServerError> {
        let db = DbService::new(&config.database_path).await?;

        if let (Some(email), Some(password)) =
            (&config.seed_admin_email, &config.seed_admin_password)
        {
            db::seed_admin_if_empty(&db.pool, email, password).await?;
        }

        let jwt_service = Arc::new(JwtService::new()?);

        Ok(Self {
            config: Arc::new(config.clone()),
            db,
            jwt_service,
        })
    }

    /// Assemble a state from already-built services. Tests use this to run
    /// the full router against an in-memory database.
    pub fn from_parts(config: Config, db: DbService, jwt_service: JwtService) -> Self {
        Self {
            config: Arc::new(config),
            db,
            jwt_service: Arc::new(jwt_service),
        }
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
