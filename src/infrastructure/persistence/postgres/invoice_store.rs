use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceChanges, InvoiceError, InvoiceStore, NewInvoice};

pub struct PostgresInvoiceStore {
  pool: PgPool,
}

impl PostgresInvoiceStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
  async fn insert(&self, invoice: NewInvoice) -> Result<(), InvoiceError> {
    // customer_id arrives as form text; the cast makes a non-uuid value a
    // statement failure like any other bad reference.
    sqlx::query(
      r#"
            INSERT INTO invoices (customer_id, amount, status, date)
            VALUES (CAST($1 AS uuid), $2, $3, $4)
            "#,
    )
    .bind(&invoice.customer_id)
    .bind(invoice.amount.in_cents())
    .bind(invoice.status.as_str())
    .bind(invoice.date)
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  async fn update(&self, id: Uuid, changes: InvoiceChanges) -> Result<(), InvoiceError> {
    // Zero rows matched is not a failure; the id is trusted from the caller.
    sqlx::query(
      r#"
            UPDATE invoices
            SET customer_id = CAST($2 AS uuid), amount = $3, status = $4
            WHERE id = $1
            "#,
    )
    .bind(id)
    .bind(&changes.customer_id)
    .bind(changes.amount.in_cents())
    .bind(changes.status.as_str())
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  async fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
    sqlx::query(
      r#"
      DELETE FROM invoices
      WHERE id = $1
      "#,
    )
    .bind(id)
    .execute(&self.pool)
    .await?;

    Ok(())
  }
}
