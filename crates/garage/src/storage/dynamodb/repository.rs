//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `garage_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use garage_core::mechanic::Mechanic;
use garage_core::storage::{MechanicRepository, Result, UserRepository};
use garage_core::user::User;

use crate::config::Config;

use super::conversions::{
    item_to_mechanic, item_to_user, mechanic_key, mechanic_to_item, user_key, user_to_item, Item,
    MECHANIC_KEY, USER_KEY,
};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error};

/// DynamoDB-based repository implementation.
///
/// Holds a single client shared by both tables. The client is cheap to clone
/// and is created once per process.
#[derive(Clone)]
pub struct DynamoDbRepository {
    client: Client,
    mechanic_table: String,
    user_table: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table names.
    pub fn new(
        client: Client,
        mechanic_table: impl Into<String>,
        user_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            mechanic_table: mechanic_table.into(),
            user_table: user_table.into(),
        }
    }

    /// Creates a new repository from configuration.
    ///
    /// Uses the AWS SDK default credential chain.
    pub async fn from_config(config: &Config) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&sdk_config);

        Self::new(
            client,
            &config.mechanic_table_name,
            &config.user_table_name,
        )
    }

    /// Reads every item of a table, following `LastEvaluatedKey` until the
    /// scan is exhausted.
    async fn scan_all(&self, table_name: &str) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            items.extend(output.items.unwrap_or_default());

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(table = table_name, count = items.len(), "Scanned table");
        Ok(items)
    }
}

// ============================================================================
// MechanicRepository implementation
// ============================================================================

#[async_trait]
impl MechanicRepository for DynamoDbRepository {
    async fn put_mechanic(&self, mechanic: &Mechanic) -> Result<()> {
        let item = mechanic_to_item(mechanic);

        self.client
            .put_item()
            .table_name(&self.mechanic_table)
            .set_item(Some(item))
            .condition_expression(format!("attribute_not_exists({MECHANIC_KEY})"))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Mechanic", mechanic.mechanic_id.clone()))?;

        Ok(())
    }

    async fn get_mechanic(&self, id: &str) -> Result<Option<Mechanic>> {
        let (key, value) = mechanic_key(id);
        let result = self
            .client
            .get_item()
            .table_name(&self.mechanic_table)
            .key(key, value)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_mechanic(&item)?)),
            None => Ok(None),
        }
    }

    async fn delete_mechanic(&self, id: &str) -> Result<()> {
        let (key, value) = mechanic_key(id);
        self.client
            .delete_item()
            .table_name(&self.mechanic_table)
            .key(key, value)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_mechanics(&self) -> Result<Vec<Mechanic>> {
        let items = self.scan_all(&self.mechanic_table).await?;
        items.iter().map(item_to_mechanic).collect()
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn put_user(&self, user: &User) -> Result<()> {
        let item = user_to_item(user);

        self.client
            .put_item()
            .table_name(&self.user_table)
            .set_item(Some(item))
            .condition_expression(format!("attribute_not_exists({USER_KEY})"))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "User", user.user_id.clone()))?;

        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let (key, value) = user_key(id);
        let result = self
            .client
            .get_item()
            .table_name(&self.user_table)
            .key(key, value)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        let (key, value) = user_key(id);
        self.client
            .delete_item()
            .table_name(&self.user_table)
            .key(key, value)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_users(&self) -> Result<Vec<User>> {
        let items = self.scan_all(&self.user_table).await?;
        items.iter().map(item_to_user).collect()
    }
}
