//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use garage_core::mechanic::Mechanic;
use garage_core::storage::{MechanicRepository, RepositoryError, Result, UserRepository};
use garage_core::user::User;

/// In-memory storage backend for tests and local runs.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    mechanics: Arc<RwLock<HashMap<String, Mechanic>>>,
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            mechanics: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl MechanicRepository for InMemoryRepository {
    async fn put_mechanic(&self, mechanic: &Mechanic) -> Result<()> {
        let mut mechanics = self.mechanics.write().await;
        if mechanics.contains_key(&mechanic.mechanic_id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Mechanic",
                id: mechanic.mechanic_id.clone(),
            });
        }
        mechanics.insert(mechanic.mechanic_id.clone(), mechanic.clone());
        Ok(())
    }

    async fn get_mechanic(&self, id: &str) -> Result<Option<Mechanic>> {
        let mechanics = self.mechanics.read().await;
        Ok(mechanics.get(id).cloned())
    }

    async fn delete_mechanic(&self, id: &str) -> Result<()> {
        let mut mechanics = self.mechanics.write().await;
        mechanics.remove(id);
        Ok(())
    }

    async fn scan_mechanics(&self) -> Result<Vec<Mechanic>> {
        let mechanics = self.mechanics.read().await;
        Ok(mechanics.values().cloned().collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn put_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.user_id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.user_id.clone(),
            });
        }
        users.insert(user.user_id.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        let mut users = self.users.write().await;
        users.remove(id);
        Ok(())
    }

    async fn scan_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_core::location::Coordinate;
    use garage_core::mechanic::MechanicRegistration;
    use garage_core::user::UserRegistration;

    fn create_test_mechanic() -> Mechanic {
        Mechanic::register(MechanicRegistration {
            name: "Ravi Kumar".to_string(),
            contact_number: "9876543210".to_string(),
            password: "s3cret".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            government_id: "KA-0042".to_string(),
            latitude: Coordinate::parse("12.9716").unwrap(),
            longitude: Coordinate::parse("77.5946").unwrap(),
        })
    }

    fn create_test_user() -> User {
        User::register(UserRegistration {
            name: "Asha".to_string(),
            contact_number: "5550100".to_string(),
            address: "4 Lake View".to_string(),
            city: "Pune".to_string(),
            password: "hunter2".to_string(),
        })
    }

    #[tokio::test]
    async fn test_mechanic_put_and_get() {
        let repo = InMemoryRepository::new();
        let mechanic = create_test_mechanic();

        repo.put_mechanic(&mechanic).await.unwrap();

        let retrieved = repo.get_mechanic(&mechanic.mechanic_id).await.unwrap();
        assert_eq!(retrieved, Some(mechanic));
    }

    #[tokio::test]
    async fn test_mechanic_get_missing() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_mechanic("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_mechanic_put_duplicate() {
        let repo = InMemoryRepository::new();
        let mechanic = create_test_mechanic();

        repo.put_mechanic(&mechanic).await.unwrap();
        let result = repo.put_mechanic(&mechanic).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Mechanic",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_mechanic_delete_is_idempotent() {
        let repo = InMemoryRepository::new();
        let mechanic = create_test_mechanic();
        repo.put_mechanic(&mechanic).await.unwrap();

        repo.delete_mechanic(&mechanic.mechanic_id).await.unwrap();
        repo.delete_mechanic(&mechanic.mechanic_id).await.unwrap();

        assert_eq!(repo.get_mechanic(&mechanic.mechanic_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_scan_mechanics() {
        let repo = InMemoryRepository::new();
        repo.put_mechanic(&create_test_mechanic()).await.unwrap();
        repo.put_mechanic(&create_test_mechanic()).await.unwrap();

        assert_eq!(repo.scan_mechanics().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_user_put_get_delete() {
        let repo = InMemoryRepository::new();
        let user = create_test_user();

        repo.put_user(&user).await.unwrap();
        assert_eq!(repo.get_user(&user.user_id).await.unwrap(), Some(user.clone()));

        repo.delete_user(&user.user_id).await.unwrap();
        assert_eq!(repo.get_user(&user.user_id).await.unwrap(), None);
        assert!(repo.scan_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        let user = create_test_user();

        repo.put_user(&user).await.unwrap();

        assert!(other.get_user(&user.user_id).await.unwrap().is_some());
    }
}
