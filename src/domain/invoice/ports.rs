use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::errors::InvoiceError;
use super::value_objects::{Amount, InvoiceStatus};

/// A validated invoice row ready for insertion.
///
/// `date` is always derived at creation time, never taken from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
  pub customer_id: String,
  pub amount: Amount,
  pub status: InvoiceStatus,
  pub date: NaiveDate,
}

/// Changes applied to an existing invoice. The stored date is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceChanges {
  pub customer_id: String,
  pub amount: Amount,
  pub status: InvoiceStatus,
}

#[async_trait]
pub trait InvoiceStore: Send + Sync {
  async fn insert(&self, invoice: NewInvoice) -> Result<(), InvoiceError>;
  /// Updates the row with the given id. The id is trusted from the caller;
  /// matching zero rows is not an error.
  async fn update(&self, id: Uuid, changes: InvoiceChanges) -> Result<(), InvoiceError>;
  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError>;
}

/// Render-layer cache for server-rendered pages.
#[async_trait]
pub trait PageCache: Send + Sync {
  /// Marks the cached output for `path` stale so the next request
  /// recomputes it.
  async fn invalidate(&self, path: &str) -> anyhow::Result<()>;
}
