use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{
  InvoiceChanges, InvoiceFormData, InvoiceStore, MutationState, PageCache,
};

use super::{FormOutcome, INVOICES_PATH, invalidate_invoices};

pub struct UpdateInvoiceUseCase {
  store: Arc<dyn InvoiceStore>,
  cache: Arc<dyn PageCache>,
}

impl UpdateInvoiceUseCase {
  pub fn new(store: Arc<dyn InvoiceStore>, cache: Arc<dyn PageCache>) -> Self {
    Self { store, cache }
  }

  /// Same contract as create, applied to the row with the given id. The id
  /// comes from the route, not the form, and is trusted to exist; updating
  /// zero rows still counts as success.
  pub async fn execute(&self, id: Uuid, form: InvoiceFormData) -> FormOutcome {
    let input = match form.validate() {
      Ok(input) => input,
      Err(errors) => {
        // Same banner copy as the create form.
        return FormOutcome::State(MutationState::invalid(
          errors,
          "Missing Fields. Failed to Create Invoice.",
        ));
      }
    };

    let changes = InvoiceChanges {
      customer_id: input.customer_id,
      amount: input.amount,
      status: input.status,
    };

    if let Err(e) = self.store.update(id, changes).await {
      tracing::error!("Failed to update invoice {}: {}", id, e);
      return FormOutcome::State(MutationState::message(
        "Database Error: Failed to update invoice",
      ));
    }

    invalidate_invoices(&self.cache).await;
    FormOutcome::Redirect(INVOICES_PATH)
  }
}
