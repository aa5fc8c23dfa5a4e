mod requests;
mod types;

pub use requests::{CreateMechanicRequest, MechanicRegistration};
pub use types::Mechanic;
