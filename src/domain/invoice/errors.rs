use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
