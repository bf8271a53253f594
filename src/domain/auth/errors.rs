use thiserror::Error;

/// Failures reported by the sign-in provider.
#[derive(Debug, Error)]
pub enum SignInError {
  /// The submitted email/password pair was rejected.
  #[error("Invalid credentials provided")]
  CredentialsSignin,

  /// Any other failure category the provider reports (misconfiguration,
  /// callback errors, access denied).
  #[error("Sign-in failed: {0}")]
  Provider(String),

  /// Failures outside the provider's taxonomy. These are never translated
  /// to user-facing text; they propagate to the error page.
  #[error(transparent)]
  Unexpected(#[from] anyhow::Error),
}
