use serde::Serialize;
use uuid::Uuid;

use crate::password::{hash_password, PASSWORD_MASK};

use super::requests::UserRegistration;

/// A user as stored in the users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub contact_number: String,
    pub address: String,
    pub city: String,
    /// Hex digest of the password, never the plaintext.
    pub password: String,
}

impl User {
    /// Builds a new record from a validated registration.
    pub fn register(registration: UserRegistration) -> Self {
        Self {
            user_id: Uuid::new_v4().to_string(),
            name: registration.name,
            contact_number: registration.contact_number,
            address: registration.address,
            city: registration.city,
            password: hash_password(&registration.password),
        }
    }

    /// Sets a specific ID for this user (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = id.into();
        self
    }

    /// Replaces the stored digest with [`PASSWORD_MASK`].
    ///
    /// Every read path must go through this before a user leaves the service.
    pub fn masked(mut self) -> Self {
        self.password = PASSWORD_MASK.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::register(UserRegistration {
            name: "Asha".to_string(),
            contact_number: "5550100".to_string(),
            address: "4 Lake View".to_string(),
            city: "Pune".to_string(),
            password: "hunter2".to_string(),
        })
    }

    #[test]
    fn test_register_hashes_password() {
        let user = sample_user();
        assert_eq!(user.password, hash_password("hunter2"));
    }

    #[test]
    fn test_register_generates_uuid() {
        let user = sample_user();
        assert!(Uuid::parse_str(&user.user_id).is_ok());
    }

    #[test]
    fn test_masked_hides_digest() {
        let user = sample_user();
        let digest = user.password.clone();
        let masked = user.masked();

        assert_eq!(masked.password, PASSWORD_MASK);

        let json = serde_json::to_string(&masked).unwrap();
        assert!(!json.contains(&digest));
    }

    #[test]
    fn test_serializes_with_table_attribute_names() {
        let user = sample_user().with_id("u-1").masked();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "UserId": "u-1",
                "Name": "Asha",
                "ContactNumber": "5550100",
                "Address": "4 Lake View",
                "City": "Pune",
                "Password": "********",
            })
        );
    }
}
