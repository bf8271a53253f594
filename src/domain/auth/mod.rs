pub mod errors;
pub mod ports;

pub use errors::SignInError;
pub use ports::{Credentials, SignInProvider};
