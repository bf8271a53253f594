use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::value_objects::{Amount, InvoiceStatus};

/// Raw invoice form payload, exactly as the browser submitted it.
///
/// Every field is optional text; coercion into typed values happens in
/// [`InvoiceFormData::validate`]. The invoice id is never part of this
/// payload (it comes from the route for updates) and neither is the date
/// (derived server-side at creation time).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceFormData {
  pub customer_id: Option<String>,
  pub amount: Option<String>,
  pub status: Option<String>,
}

/// Per-field validation messages, keyed the way the form renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceFieldErrors {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub customer_id: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub amount: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub status: Vec<String>,
}

impl InvoiceFieldErrors {
  pub fn is_empty(&self) -> bool {
    self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
  }
}

/// A validated, coerced invoice payload. Rows are only ever written from
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceInput {
  pub customer_id: String,
  pub amount: Amount,
  pub status: InvoiceStatus,
}

impl InvoiceFormData {
  /// Validates the raw payload, collecting every field failure rather than
  /// stopping at the first one.
  pub fn validate(&self) -> Result<InvoiceInput, InvoiceFieldErrors> {
    let mut errors = InvoiceFieldErrors::default();

    let customer_id = match self.customer_id.as_deref().map(str::trim) {
      Some(id) if !id.is_empty() => Some(id.to_string()),
      _ => {
        errors
          .customer_id
          .push("Please select a customer".to_string());
        None
      }
    };

    let amount = self
      .amount
      .as_deref()
      .and_then(|raw| Decimal::from_str(raw.trim()).ok())
      .and_then(|value| Amount::new(value).ok());
    if amount.is_none() {
      errors
        .amount
        .push("Please insert an amount greater than $0.".to_string());
    }

    let status = match self.status.as_deref().map(InvoiceStatus::from_str) {
      Some(Ok(status)) => Some(status),
      _ => {
        errors
          .status
          .push("Please select an invoice status".to_string());
        None
      }
    };

    match (customer_id, amount, status) {
      (Some(customer_id), Some(amount), Some(status)) => Ok(InvoiceInput {
        customer_id,
        amount,
        status,
      }),
      _ => Err(errors),
    }
  }
}

/// State carried back to the form after a mutation attempt. Lives for one
/// request/response round trip; rendered inline next to the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MutationState {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub errors: Option<InvoiceFieldErrors>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl MutationState {
  pub fn message(text: impl Into<String>) -> Self {
    Self {
      errors: None,
      message: Some(text.into()),
    }
  }

  pub fn invalid(errors: InvoiceFieldErrors, message: impl Into<String>) -> Self {
    Self {
      errors: Some(errors),
      message: Some(message.into()),
    }
  }
}
