use std::sync::Arc;

use clap::ValueEnum;

use garage_core::storage::{MechanicRepository, UserRepository};

use crate::config::Config;
use crate::handlers::{MechanicHandler, UserHandler};
use crate::storage::InMemoryRepository;

/// Where records are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// The DynamoDB tables named in the configuration.
    Dynamodb,
    /// Process-local maps, lost on exit.
    Memory,
}

/// Shared application state: one handler per table.
#[derive(Clone)]
pub struct AppState {
    pub mechanics: Arc<MechanicHandler>,
    pub users: Arc<UserHandler>,
}

impl AppState {
    /// Creates state over the given repositories.
    pub fn new(
        mechanic_repo: Arc<dyn MechanicRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            mechanics: Arc::new(MechanicHandler::new(mechanic_repo)),
            users: Arc::new(UserHandler::new(user_repo)),
        }
    }

    /// Creates state backed by a single in-memory repository.
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        Self::new(repo.clone(), repo)
    }

    /// Creates state for the selected storage backend.
    ///
    /// The DynamoDB client is built once here and shared by both handlers.
    pub async fn from_storage(backend: StorageBackend, config: &Config) -> anyhow::Result<Self> {
        match backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Self::in_memory())
            }
            #[cfg(feature = "dynamodb")]
            StorageBackend::Dynamodb => {
                tracing::info!(
                    mechanic_table = %config.mechanic_table_name,
                    user_table = %config.user_table_name,
                    "Using DynamoDB storage"
                );
                let repo = Arc::new(crate::storage::DynamoDbRepository::from_config(config).await);
                Ok(Self::new(repo.clone(), repo))
            }
            #[cfg(not(feature = "dynamodb"))]
            StorageBackend::Dynamodb => {
                let _ = config;
                anyhow::bail!("DynamoDB storage requires the `dynamodb` feature")
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::RouteHandler;
    use garage_core::routing::RoutedRequest;

    #[tokio::test]
    async fn test_memory_backend() {
        let config = Config::default();
        let state = AppState::from_storage(StorageBackend::Memory, &config)
            .await
            .unwrap();

        let response = state.users.handle(&RoutedRequest::new("GET /users")).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "[]");
    }

    #[test]
    fn test_storage_backend_names() {
        assert_eq!(
            StorageBackend::from_str("dynamodb", true),
            Ok(StorageBackend::Dynamodb)
        );
        assert_eq!(
            StorageBackend::from_str("memory", true),
            Ok(StorageBackend::Memory)
        );
    }
}
