//! Functional core of the garage services.
//!
//! Everything in this crate is pure: record and request types, validation,
//! password digests, location codes, route keys and the repository traits the
//! handlers are written against. Table access and the runtime adapters live
//! in the `garage` binary.

pub mod location;
pub mod mechanic;
pub mod password;
pub mod routing;
pub mod serde;
pub mod storage;
pub mod user;
pub mod validation;
