use chrono::Utc;
use std::sync::Arc;

use crate::domain::invoice::{InvoiceFormData, InvoiceStore, MutationState, NewInvoice, PageCache};

use super::{FormOutcome, INVOICES_PATH, invalidate_invoices};

pub struct CreateInvoiceUseCase {
  store: Arc<dyn InvoiceStore>,
  cache: Arc<dyn PageCache>,
}

impl CreateInvoiceUseCase {
  pub fn new(store: Arc<dyn InvoiceStore>, cache: Arc<dyn PageCache>) -> Self {
    Self { store, cache }
  }

  /// Validates the submitted form, inserts one invoice row, and on success
  /// invalidates the invoices list before redirecting to it. Validation and
  /// statement failures come back as form state, never as errors.
  pub async fn execute(&self, form: InvoiceFormData) -> FormOutcome {
    let input = match form.validate() {
      Ok(input) => input,
      Err(errors) => {
        return FormOutcome::State(MutationState::invalid(
          errors,
          "Missing Fields. Failed to Create Invoice.",
        ));
      }
    };

    let invoice = NewInvoice {
      customer_id: input.customer_id,
      amount: input.amount,
      status: input.status,
      // Creation date is always today's UTC date, regardless of the form.
      date: Utc::now().date_naive(),
    };

    if let Err(e) = self.store.insert(invoice).await {
      tracing::error!("Failed to create invoice: {}", e);
      return FormOutcome::State(MutationState::message(
        "Database Error: Failed to create invoice",
      ));
    }

    invalidate_invoices(&self.cache).await;
    FormOutcome::Redirect(INVOICES_PATH)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::invoice::test_support::{RecordingCache, RecordingStore, valid_form};
  use crate::domain::invoice::{InvoiceFormData, InvoiceStatus};

  fn use_case(
    store: RecordingStore,
    cache: RecordingCache,
  ) -> (CreateInvoiceUseCase, Arc<RecordingStore>, Arc<RecordingCache>) {
    let store = Arc::new(store);
    let cache = Arc::new(cache);
    (
      CreateInvoiceUseCase::new(store.clone(), cache.clone()),
      store,
      cache,
    )
  }

  #[tokio::test]
  async fn test_create_inserts_coerced_row_and_redirects() {
    let (use_case, store, cache) = use_case(RecordingStore::default(), RecordingCache::default());

    let outcome = use_case.execute(valid_form()).await;

    assert!(matches!(outcome, FormOutcome::Redirect(INVOICES_PATH)));

    let inserts = store.inserts.lock().unwrap();
    assert_eq!(inserts.len(), 1);
    assert_eq!(inserts[0].customer_id, "3958dc9e-712f-4377-85e9-fec4b6a6442a");
    assert_eq!(inserts[0].amount.in_cents(), 1050);
    assert_eq!(inserts[0].status, InvoiceStatus::Pending);
    assert_eq!(inserts[0].date, Utc::now().date_naive());

    let invalidations = cache.invalidations.lock().unwrap();
    assert_eq!(invalidations.as_slice(), [INVOICES_PATH]);
  }

  #[tokio::test]
  async fn test_invalid_form_has_no_side_effects() {
    let (use_case, store, cache) = use_case(RecordingStore::default(), RecordingCache::default());

    let outcome = use_case.execute(InvoiceFormData::default()).await;

    let FormOutcome::State(state) = outcome else {
      panic!("expected form state");
    };
    assert_eq!(
      state.message.as_deref(),
      Some("Missing Fields. Failed to Create Invoice.")
    );
    assert!(!state.errors.unwrap().is_empty());
    assert!(store.inserts.lock().unwrap().is_empty());
    assert!(cache.invalidations.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_statement_failure_is_a_soft_error() {
    let (use_case, _store, cache) = use_case(RecordingStore::failing(), RecordingCache::default());

    let outcome = use_case.execute(valid_form()).await;

    let FormOutcome::State(state) = outcome else {
      panic!("expected form state");
    };
    assert_eq!(
      state.message.as_deref(),
      Some("Database Error: Failed to create invoice")
    );
    assert!(state.errors.is_none());
    assert!(cache.invalidations.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_cache_failure_does_not_block_redirect() {
    let (use_case, store, _cache) = use_case(RecordingStore::default(), RecordingCache::failing());

    let outcome = use_case.execute(valid_form()).await;

    assert!(matches!(outcome, FormOutcome::Redirect(_)));
    assert_eq!(store.inserts.lock().unwrap().len(), 1);
  }
}
