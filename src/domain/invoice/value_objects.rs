use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid amount: {0}")]
  InvalidAmount(String),
  #[error("Invalid invoice status: {0}")]
  InvalidStatus(String),
}

// Invoice Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
  Pending,
  Paid,
}

impl InvoiceStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      InvoiceStatus::Pending => "pending",
      InvoiceStatus::Paid => "paid",
    }
  }
}

impl FromStr for InvoiceStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "pending" => Ok(InvoiceStatus::Pending),
      "paid" => Ok(InvoiceStatus::Paid),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown status: {}",
        s
      ))),
    }
  }
}

impl fmt::Display for InvoiceStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Positive invoice amount, held as whole cents.
///
/// Forms submit amounts in decimal currency units; rows store integer cents.
/// The conversion happens once here so it cannot drift between handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(i64);

impl Amount {
  pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
    if value <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidAmount(
        "Amount must be greater than zero".to_string(),
      ));
    }

    let cents = (value * Decimal::ONE_HUNDRED)
      .trunc()
      .to_i64()
      .ok_or_else(|| ValueObjectError::InvalidAmount(format!("Amount out of range: {}", value)))?;

    Ok(Self(cents))
  }

  pub fn in_cents(&self) -> i64 {
    self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_amount_converts_to_cents_exactly() {
    assert_eq!(Amount::new(dec!(10.50)).unwrap().in_cents(), 1050);
    assert_eq!(Amount::new(dec!(0.01)).unwrap().in_cents(), 1);
    assert_eq!(Amount::new(dec!(250)).unwrap().in_cents(), 25000);
  }

  #[test]
  fn test_amount_rejects_zero_and_negative() {
    assert!(Amount::new(dec!(0)).is_err());
    assert!(Amount::new(dec!(-5)).is_err());
    assert!(Amount::new(dec!(-0.01)).is_err());
  }

  #[test]
  fn test_status_round_trip() {
    assert_eq!(
      "pending".parse::<InvoiceStatus>().unwrap(),
      InvoiceStatus::Pending
    );
    assert_eq!("paid".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Paid);
    assert_eq!(InvoiceStatus::Pending.as_str(), "pending");
    assert_eq!(InvoiceStatus::Paid.as_str(), "paid");
  }

  #[test]
  fn test_status_rejects_unknown_values() {
    assert!("overdue".parse::<InvoiceStatus>().is_err());
    assert!("".parse::<InvoiceStatus>().is_err());
  }
}
