use serde::Serialize;
use uuid::Uuid;

use crate::location::{encode, Coordinate, MECHANIC_GEOHASH_PRECISION};
use crate::password::hash_password;

use super::requests::MechanicRegistration;

/// A registered mechanic as stored in the mechanics table.
///
/// Serializes with the table's attribute names. Coordinates render as
/// decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mechanic {
    pub mechanic_id: String,
    pub name: String,
    pub contact_number: String,
    /// Hex digest of the password, never the plaintext.
    pub password: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub government_id: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    /// Derived from the coordinates at [`MECHANIC_GEOHASH_PRECISION`].
    pub location_geohash: String,
}

impl Mechanic {
    /// Builds a new record from a validated registration.
    ///
    /// Generates the identifier, hashes the password and derives the
    /// location code.
    pub fn register(registration: MechanicRegistration) -> Self {
        let location_geohash = encode(
            registration.latitude.value(),
            registration.longitude.value(),
            MECHANIC_GEOHASH_PRECISION,
        );

        Self {
            mechanic_id: Uuid::new_v4().to_string(),
            name: registration.name,
            contact_number: registration.contact_number,
            password: hash_password(&registration.password),
            address: registration.address,
            city: registration.city,
            state: registration.state,
            government_id: registration.government_id,
            latitude: registration.latitude,
            longitude: registration.longitude,
            location_geohash,
        }
    }

    /// Sets a specific ID for this mechanic (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.mechanic_id = id.into();
        self
    }
}
