use async_trait::async_trait;

use crate::mechanic::Mechanic;
use crate::user::User;

use super::Result;

/// Repository for the mechanics table, keyed by `MechanicId`.
#[async_trait]
pub trait MechanicRepository: Send + Sync {
    /// Stores a new mechanic.
    async fn put_mechanic(&self, mechanic: &Mechanic) -> Result<()>;

    /// Gets a mechanic by its ID.
    async fn get_mechanic(&self, id: &str) -> Result<Option<Mechanic>>;

    /// Deletes a mechanic by its ID. Deleting a missing ID is not an error.
    async fn delete_mechanic(&self, id: &str) -> Result<()>;

    /// Returns every mechanic in the table.
    async fn scan_mechanics(&self) -> Result<Vec<Mechanic>>;
}

/// Repository for the users table, keyed by `UserId`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    async fn put_user(&self, user: &User) -> Result<()>;

    /// Gets a user by their ID.
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Deletes a user by their ID. Deleting a missing ID is not an error.
    async fn delete_user(&self, id: &str) -> Result<()>;

    /// Returns every user in the table, digests included.
    async fn scan_users(&self) -> Result<Vec<User>>;
}
