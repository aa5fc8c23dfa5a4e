use thiserror::Error;

/// Errors produced while validating a request payload, before any table
/// operation is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body is required")]
    MissingBody,
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: i32,
        max: i32,
    },
}

/// Collects the names of required fields that are absent.
#[derive(Debug, Default)]
pub(crate) struct MissingFields(Vec<&'static str>);

impl MissingFields {
    /// Takes the value out of a required field, recording its name if absent.
    pub(crate) fn take<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.0.push(name);
        }
        value
    }

    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError::MissingFields(self.0)
    }
}

/// Parses a JSON request body into a request schema.
pub(crate) fn parse_body<'a, T>(body: Option<&'a str>) -> Result<T, ValidationError>
where
    T: serde::Deserialize<'a>,
{
    let body = body
        .filter(|b| !b.trim().is_empty())
        .ok_or(ValidationError::MissingBody)?;
    serde_json::from_str(body).map_err(|e| ValidationError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let error = ValidationError::MissingFields(vec!["Name", "City"]);
        assert_eq!(error.to_string(), "Missing required field(s): Name, City");
    }

    #[test]
    fn test_out_of_range_display() {
        let error = ValidationError::OutOfRange {
            field: "Latitude",
            value: "91.5".to_string(),
            min: -90,
            max: 90,
        };
        assert_eq!(
            error.to_string(),
            "Latitude must be between -90 and 90, got 91.5"
        );
    }

    #[test]
    fn test_missing_fields_collector() {
        let mut missing = MissingFields::default();
        assert_eq!(missing.take("Name", Some("Ana")), Some("Ana"));
        assert_eq!(missing.take::<String>("City", None), None);

        assert_eq!(
            missing.into_error(),
            ValidationError::MissingFields(vec!["City"])
        );
    }

    #[test]
    fn test_parse_body_missing() {
        let result: Result<serde_json::Value, _> = parse_body(None);
        assert_eq!(result, Err(ValidationError::MissingBody));

        let result: Result<serde_json::Value, _> = parse_body(Some("  "));
        assert_eq!(result, Err(ValidationError::MissingBody));
    }

    #[test]
    fn test_parse_body_malformed() {
        let result: Result<serde_json::Value, _> = parse_body(Some("{not json"));
        assert!(matches!(result, Err(ValidationError::MalformedBody(_))));
    }
}
