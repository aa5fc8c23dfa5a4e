use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// A missing record is not an error: lookups return `Ok(None)` and deletes
/// succeed whether or not the record existed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A put found a record with the same key already in the table.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// A stored item could not be decoded into a record.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "User",
            id: "user-1".to_string(),
        };
        assert_eq!(error.to_string(), "User already exists: user-1");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("Missing or invalid field: Latitude".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: Missing or invalid field: Latitude"
        );
    }
}
