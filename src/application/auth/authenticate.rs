use std::sync::Arc;

use crate::domain::auth::{Credentials, SignInError, SignInProvider};

pub struct AuthenticateUseCase {
  provider: Arc<dyn SignInProvider>,
}

impl AuthenticateUseCase {
  pub fn new(provider: Arc<dyn SignInProvider>) -> Self {
    Self { provider }
  }

  /// Delegates credential verification to the sign-in provider.
  ///
  /// Returns `None` on success, a user-facing message for categorized
  /// failures, and `Err` for anything uncategorized so it reaches the
  /// error page instead of the login form.
  pub async fn execute(&self, credentials: Credentials) -> Result<Option<String>, SignInError> {
    match self.provider.sign_in(credentials).await {
      Ok(()) => Ok(None),
      Err(SignInError::CredentialsSignin) => Ok(Some("Invalid credentials.".to_string())),
      Err(SignInError::Provider(reason)) => {
        tracing::warn!("Sign-in rejected: {}", reason);
        Ok(Some("Something went wrong.".to_string()))
      }
      Err(err) => Err(err),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use std::sync::Mutex;

  struct StubProvider {
    responses: Mutex<Vec<Result<(), SignInError>>>,
  }

  impl StubProvider {
    fn with(response: Result<(), SignInError>) -> Arc<Self> {
      Arc::new(Self {
        responses: Mutex::new(vec![response]),
      })
    }
  }

  #[async_trait]
  impl SignInProvider for StubProvider {
    async fn sign_in(&self, _credentials: Credentials) -> Result<(), SignInError> {
      self.responses.lock().unwrap().pop().unwrap()
    }
  }

  fn credentials() -> Credentials {
    Credentials {
      email: "user@nextmail.com".to_string(),
      password: "123456".to_string(),
    }
  }

  #[tokio::test]
  async fn test_success_returns_no_message() {
    let use_case = AuthenticateUseCase::new(StubProvider::with(Ok(())));
    let result = use_case.execute(credentials()).await.unwrap();
    assert_eq!(result, None);
  }

  #[tokio::test]
  async fn test_rejected_credentials() {
    let use_case =
      AuthenticateUseCase::new(StubProvider::with(Err(SignInError::CredentialsSignin)));
    let result = use_case.execute(credentials()).await.unwrap();
    assert_eq!(result.as_deref(), Some("Invalid credentials."));
  }

  #[tokio::test]
  async fn test_other_categorized_failures() {
    let use_case = AuthenticateUseCase::new(StubProvider::with(Err(SignInError::Provider(
      "callback route error".to_string(),
    ))));
    let result = use_case.execute(credentials()).await.unwrap();
    assert_eq!(result.as_deref(), Some("Something went wrong."));
  }

  #[tokio::test]
  async fn test_uncategorized_failures_propagate() {
    let use_case = AuthenticateUseCase::new(StubProvider::with(Err(SignInError::Unexpected(
      anyhow::anyhow!("connection reset"),
    ))));
    let result = use_case.execute(credentials()).await;
    assert!(matches!(result, Err(SignInError::Unexpected(_))));
  }
}
