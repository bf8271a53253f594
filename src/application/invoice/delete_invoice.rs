use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceStore, MutationState, PageCache};

use super::invalidate_invoices;

pub struct DeleteInvoiceUseCase {
  store: Arc<dyn InvoiceStore>,
  cache: Arc<dyn PageCache>,
}

impl DeleteInvoiceUseCase {
  pub fn new(store: Arc<dyn InvoiceStore>, cache: Arc<dyn PageCache>) -> Self {
    Self { store, cache }
  }

  /// Deletes the row with the given id and invalidates the invoices list.
  /// Unlike create and update, a statement failure here propagates as an
  /// error instead of coming back as form state; the caller stays on the
  /// current view, so there is no inline form to report into.
  pub async fn execute(&self, id: Uuid) -> Result<MutationState, InvoiceError> {
    self.store.delete(id).await?;
    invalidate_invoices(&self.cache).await;
    Ok(MutationState::message("Deleted Invoice."))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::invoice::INVOICES_PATH;
  use crate::application::invoice::test_support::{RecordingCache, RecordingStore};

  #[tokio::test]
  async fn test_delete_reports_message_and_invalidates_once() {
    let store = Arc::new(RecordingStore::default());
    let cache = Arc::new(RecordingCache::default());
    let use_case = DeleteInvoiceUseCase::new(store.clone(), cache.clone());
    let id = Uuid::new_v4();

    let state = use_case.execute(id).await.unwrap();

    assert_eq!(state.message.as_deref(), Some("Deleted Invoice."));
    assert!(state.errors.is_none());
    assert_eq!(store.deletes.lock().unwrap().as_slice(), [id]);
    assert_eq!(cache.invalidations.lock().unwrap().as_slice(), [INVOICES_PATH]);
  }

  #[tokio::test]
  async fn test_statement_failure_is_fatal() {
    let store = Arc::new(RecordingStore::failing());
    let cache = Arc::new(RecordingCache::default());
    let use_case = DeleteInvoiceUseCase::new(store, cache.clone());

    let result = use_case.execute(Uuid::new_v4()).await;

    assert!(result.is_err());
    assert!(cache.invalidations.lock().unwrap().is_empty());
  }
}
