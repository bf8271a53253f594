pub mod create_invoice;
pub mod delete_invoice;
pub mod update_invoice;

pub use create_invoice::CreateInvoiceUseCase;
pub use delete_invoice::DeleteInvoiceUseCase;
pub use update_invoice::UpdateInvoiceUseCase;

use std::sync::Arc;

use crate::domain::invoice::{MutationState, PageCache};

/// Path of the invoices list view. Its cached rendering is invalidated
/// after every successful mutation, and create/update redirect back to it.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Result of a create/update form submission.
#[derive(Debug)]
pub enum FormOutcome {
  /// The mutation was applied; the caller should navigate to `path`.
  /// Supersedes any state response.
  Redirect(&'static str),
  /// Validation or statement failure, rendered inline next to the form.
  State(MutationState),
}

/// A stale invoices list is recomputed on the next request either way, so
/// an unreachable cache is logged rather than turned into a user error.
pub(crate) async fn invalidate_invoices(cache: &Arc<dyn PageCache>) {
  if let Err(e) = cache.invalidate(INVOICES_PATH).await {
    tracing::warn!("Failed to invalidate {}: {}", INVOICES_PATH, e);
  }
}
