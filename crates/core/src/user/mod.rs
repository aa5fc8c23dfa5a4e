mod requests;
mod types;

pub use requests::{CreateUserRequest, UserRegistration};
pub use types::User;
