//! Application state - shared across all handlers.

use std::sync::Arc;

use devconnect_core::ports::{
    PasswordService, PostRepository, ProfileRepository, TokenService, UserRepository,
};
use devconnect_infra::database::{
    DatabaseConfig, InMemoryPostRepository, InMemoryProfileRepository, InMemoryUserRepository,
};
use devconnect_infra::{Argon2PasswordService, JwtTokenService};
#[cfg(all(test, feature = "postgres"))]
use devconnect_infra::JwtConfig;

#[cfg(feature = "postgres")]
use devconnect_infra::database::{
    DatabaseConnections, PostgresPostRepository, PostgresProfileRepository, PostgresUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build the application state, on PostgreSQL when a database is configured.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());

        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => {
                let connections = DatabaseConnections::init(config).await?;
                Self::postgres(&connections, tokens)
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory(tokens)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory(tokens)
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "postgres")]
    fn postgres(connections: &DatabaseConnections, tokens: Arc<dyn TokenService>) -> Self {
        let db = &connections.main;
        Self {
            users: Arc::new(PostgresUserRepository::new(Arc::clone(db))),
            posts: Arc::new(PostgresPostRepository::new(Arc::clone(db))),
            profiles: Arc::new(PostgresProfileRepository::new(Arc::clone(db))),
            tokens,
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }

    /// Volatile state; everything is lost when the process exits.
    pub fn in_memory(tokens: Arc<dyn TokenService>) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            tokens,
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }
}
