use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordVerifier};
use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::auth::{Credentials, SignInError, SignInProvider};

/// Verifies submitted credentials against the `users` table with Argon2id.
///
/// Unknown email and wrong password both report `CredentialsSignin`, so the
/// login form cannot be used to probe which addresses exist. Lookup
/// failures stay uncategorized and surface through the error page.
pub struct ArgonCredentialsProvider {
  pool: PgPool,
  argon2: Argon2<'static>,
}

impl ArgonCredentialsProvider {
  pub fn new(pool: PgPool) -> Self {
    Self {
      pool,
      argon2: Argon2::default(),
    }
  }
}

#[async_trait]
impl SignInProvider for ArgonCredentialsProvider {
  async fn sign_in(&self, credentials: Credentials) -> Result<(), SignInError> {
    let stored: Option<(String,)> = sqlx::query_as(
      r#"
            SELECT password_hash
            FROM users
            WHERE email = $1
            "#,
    )
    .bind(&credentials.email)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| SignInError::Unexpected(anyhow::Error::new(e).context("Failed to look up user")))?;

    let Some((hash,)) = stored else {
      return Err(SignInError::CredentialsSignin);
    };

    let parsed = PasswordHash::new(&hash)
      .map_err(|e| SignInError::Provider(format!("Stored hash is malformed: {}", e)))?;

    // verify_password compares in constant time
    match self
      .argon2
      .verify_password(credentials.password.as_bytes(), &parsed)
    {
      Ok(()) => Ok(()),
      Err(argon2::password_hash::Error::Password) => Err(SignInError::CredentialsSignin),
      Err(e) => Err(SignInError::Provider(format!(
        "Password verification failed: {}",
        e
      ))),
    }
  }
}
