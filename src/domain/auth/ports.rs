use async_trait::async_trait;

use super::errors::SignInError;

/// Credential pair submitted through the login form.
#[derive(Debug, Clone)]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

/// External credential-verification collaborator.
///
/// Implementations own the whole verification story (lookup, hashing,
/// lockout); this crate only maps their failure categories to UI copy.
#[async_trait]
pub trait SignInProvider: Send + Sync {
  async fn sign_in(&self, credentials: Credentials) -> Result<(), SignInError>;
}
