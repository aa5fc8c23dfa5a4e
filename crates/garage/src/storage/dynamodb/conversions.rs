//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use garage_core::location::Coordinate;
use garage_core::mechanic::Mechanic;
use garage_core::storage::RepositoryError;
use garage_core::user::User;

pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Key attributes
// ============================================================================

pub const MECHANIC_KEY: &str = "MechanicId";
pub const USER_KEY: &str = "UserId";

/// Primary key of a mechanic item.
pub fn mechanic_key(id: &str) -> (String, AttributeValue) {
    (MECHANIC_KEY.to_string(), AttributeValue::S(id.to_string()))
}

/// Primary key of a user item.
pub fn user_key(id: &str) -> (String, AttributeValue) {
    (USER_KEY.to_string(), AttributeValue::S(id.to_string()))
}

// ============================================================================
// Mechanic conversions
// ============================================================================

/// Convert a Mechanic to DynamoDB item.
///
/// Coordinates are written as number attributes from their decimal text.
pub fn mechanic_to_item(mechanic: &Mechanic) -> Item {
    let mut item = HashMap::new();

    item.insert(
        MECHANIC_KEY.to_string(),
        AttributeValue::S(mechanic.mechanic_id.clone()),
    );
    item.insert("Name".to_string(), AttributeValue::S(mechanic.name.clone()));
    item.insert(
        "ContactNumber".to_string(),
        AttributeValue::S(mechanic.contact_number.clone()),
    );
    item.insert(
        "Password".to_string(),
        AttributeValue::S(mechanic.password.clone()),
    );
    item.insert(
        "Address".to_string(),
        AttributeValue::S(mechanic.address.clone()),
    );
    item.insert("City".to_string(), AttributeValue::S(mechanic.city.clone()));
    item.insert(
        "State".to_string(),
        AttributeValue::S(mechanic.state.clone()),
    );
    item.insert(
        "GovernmentId".to_string(),
        AttributeValue::S(mechanic.government_id.clone()),
    );
    item.insert(
        "Latitude".to_string(),
        AttributeValue::N(mechanic.latitude.as_str().to_string()),
    );
    item.insert(
        "Longitude".to_string(),
        AttributeValue::N(mechanic.longitude.as_str().to_string()),
    );
    item.insert(
        "LocationGeohash".to_string(),
        AttributeValue::S(mechanic.location_geohash.clone()),
    );

    item
}

/// Convert a DynamoDB item to Mechanic.
pub fn item_to_mechanic(item: &Item) -> Result<Mechanic, RepositoryError> {
    Ok(Mechanic {
        mechanic_id: get_string(item, MECHANIC_KEY)?,
        name: get_text(item, "Name")?,
        contact_number: get_text(item, "ContactNumber")?,
        password: get_string(item, "Password")?,
        address: get_text(item, "Address")?,
        city: get_text(item, "City")?,
        state: get_text(item, "State")?,
        government_id: get_text(item, "GovernmentId")?,
        latitude: get_coordinate(item, "Latitude")?,
        longitude: get_coordinate(item, "Longitude")?,
        location_geohash: get_string(item, "LocationGeohash")?,
    })
}

// ============================================================================
// User conversions
// ============================================================================

/// Convert a User to DynamoDB item.
pub fn user_to_item(user: &User) -> Item {
    let mut item = HashMap::new();

    item.insert(USER_KEY.to_string(), AttributeValue::S(user.user_id.clone()));
    item.insert("Name".to_string(), AttributeValue::S(user.name.clone()));
    item.insert(
        "ContactNumber".to_string(),
        AttributeValue::S(user.contact_number.clone()),
    );
    item.insert(
        "Address".to_string(),
        AttributeValue::S(user.address.clone()),
    );
    item.insert("City".to_string(), AttributeValue::S(user.city.clone()));
    item.insert(
        "Password".to_string(),
        AttributeValue::S(user.password.clone()),
    );

    item
}

/// Convert a DynamoDB item to User.
pub fn item_to_user(item: &Item) -> Result<User, RepositoryError> {
    Ok(User {
        user_id: get_string(item, USER_KEY)?,
        name: get_text(item, "Name")?,
        contact_number: get_text(item, "ContactNumber")?,
        address: get_text(item, "Address")?,
        city: get_text(item, "City")?,
        password: get_string(item, "Password")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required text attribute stored either as a string or as a number.
///
/// Older items were written straight from client JSON, where contact numbers
/// and government ids sometimes arrived as numbers.
fn get_text(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().or_else(|_| v.as_n()).ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required coordinate attribute (number or numeric string).
fn get_coordinate(item: &Item, key: &str) -> Result<Coordinate, RepositoryError> {
    let s = get_text(item, key)?;
    Coordinate::parse(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid coordinate {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_core::password::hash_password;

    fn sample_mechanic() -> Mechanic {
        Mechanic {
            mechanic_id: "0b7e6f0a-3c1f-4f7b-9a57-1c2d3e4f5a6b".to_string(),
            name: "Ravi Kumar".to_string(),
            contact_number: "9876543210".to_string(),
            password: hash_password("s3cret"),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            government_id: "KA-0042".to_string(),
            latitude: Coordinate::parse("12.9716").unwrap(),
            longitude: Coordinate::parse("77.5946").unwrap(),
            location_geohash: "302302320131".to_string(),
        }
    }

    fn sample_user() -> User {
        User {
            user_id: "5c2b1a09-8e7d-4c6b-a5f4-e3d2c1b0a998".to_string(),
            name: "Asha".to_string(),
            contact_number: "5550100".to_string(),
            address: "4 Lake View".to_string(),
            city: "Pune".to_string(),
            password: hash_password("hunter2"),
        }
    }

    #[test]
    fn test_mechanic_round_trip() {
        let mechanic = sample_mechanic();
        let item = mechanic_to_item(&mechanic);
        let parsed = item_to_mechanic(&item).unwrap();

        assert_eq!(parsed, mechanic);
    }

    #[test]
    fn test_mechanic_coordinates_are_numbers() {
        let item = mechanic_to_item(&sample_mechanic());

        assert_eq!(
            item.get("Latitude"),
            Some(&AttributeValue::N("12.9716".to_string()))
        );
        assert_eq!(
            item.get("Longitude"),
            Some(&AttributeValue::N("77.5946".to_string()))
        );
    }

    #[test]
    fn test_mechanic_item_has_key() {
        let item = mechanic_to_item(&sample_mechanic());
        let (name, value) = mechanic_key("0b7e6f0a-3c1f-4f7b-9a57-1c2d3e4f5a6b");

        assert_eq!(item.get(&name), Some(&value));
    }

    #[test]
    fn test_mechanic_with_numeric_contact_number() {
        let mut item = mechanic_to_item(&sample_mechanic());
        item.insert(
            "ContactNumber".to_string(),
            AttributeValue::N("9876543210".to_string()),
        );

        let parsed = item_to_mechanic(&item).unwrap();
        assert_eq!(parsed.contact_number, "9876543210");
    }

    #[test]
    fn test_mechanic_invalid_coordinate() {
        let mut item = mechanic_to_item(&sample_mechanic());
        item.insert("Latitude".to_string(), AttributeValue::S("north".to_string()));

        let result = item_to_mechanic(&item);
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_user_round_trip() {
        let user = sample_user();
        let item = user_to_item(&user);
        let parsed = item_to_user(&item).unwrap();

        assert_eq!(parsed, user);
    }

    #[test]
    fn test_user_item_has_key() {
        let item = user_to_item(&sample_user());
        let (name, value) = user_key("5c2b1a09-8e7d-4c6b-a5f4-e3d2c1b0a998");

        assert_eq!(item.get(&name), Some(&value));
    }

    #[test]
    fn test_get_string_missing_field() {
        let item = HashMap::new();
        let result = get_string(&item, "UserId");
        assert_eq!(
            result,
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: UserId".to_string()
            ))
        );
    }
}
