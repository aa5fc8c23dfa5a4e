//! Request payloads for mechanic operations.

use serde::Deserialize;

use crate::location::{Coordinate, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::serde::deserialize_optional_text;
use crate::validation::{parse_body, MissingFields, ValidationError};

/// Body of `POST /mechanics` as sent by clients.
///
/// Every field is optional at this stage so that all missing fields can be
/// reported at once by [`CreateMechanicRequest::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMechanicRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub contact_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub government_id: Option<String>,
    #[serde(default)]
    pub latitude: Option<Coordinate>,
    #[serde(default)]
    pub longitude: Option<Coordinate>,
}

/// A validated mechanic registration, password still in plaintext.
#[derive(Debug, Clone, PartialEq)]
pub struct MechanicRegistration {
    pub name: String,
    pub contact_number: String,
    pub password: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub government_id: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

impl CreateMechanicRequest {
    /// Parses a raw JSON body.
    pub fn from_body(body: Option<&str>) -> Result<Self, ValidationError> {
        parse_body(body)
    }

    /// Checks that every required field is present and that the coordinates
    /// are in range.
    pub fn validate(self) -> Result<MechanicRegistration, ValidationError> {
        let mut missing = MissingFields::default();
        let fields = (
            missing.take("Name", self.name),
            missing.take("ContactNumber", self.contact_number),
            missing.take("Password", self.password),
            missing.take("Address", self.address),
            missing.take("City", self.city),
            missing.take("State", self.state),
            missing.take("GovernmentId", self.government_id),
            missing.take("Latitude", self.latitude),
            missing.take("Longitude", self.longitude),
        );

        let (
            Some(name),
            Some(contact_number),
            Some(password),
            Some(address),
            Some(city),
            Some(state),
            Some(government_id),
            Some(latitude),
            Some(longitude),
        ) = fields
        else {
            return Err(missing.into_error());
        };

        check_range("Latitude", &latitude, LATITUDE_RANGE)?;
        check_range("Longitude", &longitude, LONGITUDE_RANGE)?;

        Ok(MechanicRegistration {
            name,
            contact_number,
            password,
            address,
            city,
            state,
            government_id,
            latitude,
            longitude,
        })
    }
}

fn check_range(
    field: &'static str,
    coordinate: &Coordinate,
    range: (f64, f64),
) -> Result<(), ValidationError> {
    if coordinate.is_within(range) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: coordinate.to_string(),
            min: range.0 as i32,
            max: range.1 as i32,
        })
    }
}
