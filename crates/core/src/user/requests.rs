//! Request payloads for user operations.

use serde::Deserialize;

use crate::serde::deserialize_optional_text;
use crate::validation::{parse_body, MissingFields, ValidationError};

/// Body of `POST /users` as sent by clients.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub contact_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub password: Option<String>,
}

/// A validated user registration, password still in plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRegistration {
    pub name: String,
    pub contact_number: String,
    pub address: String,
    pub city: String,
    pub password: String,
}

impl CreateUserRequest {
    /// Parses a raw JSON body.
    pub fn from_body(body: Option<&str>) -> Result<Self, ValidationError> {
        parse_body(body)
    }

    /// Checks that every required field is present.
    pub fn validate(self) -> Result<UserRegistration, ValidationError> {
        let mut missing = MissingFields::default();
        let fields = (
            missing.take("Name", self.name),
            missing.take("ContactNumber", self.contact_number),
            missing.take("Address", self.address),
            missing.take("City", self.city),
            missing.take("Password", self.password),
        );

        let (Some(name), Some(contact_number), Some(address), Some(city), Some(password)) = fields
        else {
            return Err(missing.into_error());
        };

        Ok(UserRegistration {
            name,
            contact_number,
            address,
            city,
            password,
        })
    }
}
