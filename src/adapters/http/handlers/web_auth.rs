use actix_web::{HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::adapters::http::errors::ApiError;
use crate::application::auth::AuthenticateUseCase;
use crate::domain::auth::Credentials;

#[derive(Debug, Deserialize)]
pub struct LoginFormData {
  email: String,
  password: String,
}

/// Handle login form submission
///
/// Categorized sign-in failures render inline next to the form; anything
/// else escapes as ApiError.
pub async fn login_submit(
  form: web::Form<LoginFormData>,
  use_case: web::Data<Arc<AuthenticateUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let form = form.into_inner();
  let credentials = Credentials {
    email: form.email,
    password: form.password,
  };

  match use_case.execute(credentials).await? {
    None => Ok(
      HttpResponse::Ok()
        .insert_header(("HX-Redirect", "/dashboard"))
        .finish(),
    ),
    Some(message) => {
      Ok(HttpResponse::Unauthorized().json(serde_json::json!({ "message": message })))
    }
  }
}
