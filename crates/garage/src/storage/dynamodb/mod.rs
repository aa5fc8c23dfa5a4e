//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository traits
//! using `aws-sdk-dynamodb`. Mechanics and users live in two separate tables,
//! each keyed by a single string attribute.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
