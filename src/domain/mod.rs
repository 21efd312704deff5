mod auth_result;
mod credentials;

pub use auth_result::AuthResult;
pub use credentials::Credentials;
