use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::errors::ApiError;
use crate::application::invoice::{
  CreateInvoiceUseCase, DeleteInvoiceUseCase, FormOutcome, UpdateInvoiceUseCase,
};
use crate::domain::invoice::InvoiceFormData;

fn form_response(outcome: FormOutcome) -> HttpResponse {
  match outcome {
    FormOutcome::Redirect(path) => HttpResponse::Ok()
      .insert_header(("HX-Redirect", path))
      .finish(),
    FormOutcome::State(state) => HttpResponse::UnprocessableEntity().json(state),
  }
}

// POST /dashboard/invoices - Create a new invoice
pub async fn create_invoice_submit(
  form: web::Form<InvoiceFormData>,
  use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> HttpResponse {
  form_response(use_case.execute(form.into_inner()).await)
}

// POST /dashboard/invoices/{id} - Update an existing invoice
pub async fn update_invoice_submit(
  path: web::Path<Uuid>,
  form: web::Form<InvoiceFormData>,
  use_case: web::Data<Arc<UpdateInvoiceUseCase>>,
) -> HttpResponse {
  form_response(use_case.execute(path.into_inner(), form.into_inner()).await)
}

// POST /dashboard/invoices/{id}/delete - Delete an invoice
//
// A failing delete bubbles up as ApiError and renders the error page; the
// caller stays on the list view otherwise.
pub async fn delete_invoice_submit(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DeleteInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let state = use_case.execute(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(state))
}
