use actix_web::web;
use std::sync::Arc;

use crate::application::auth::AuthenticateUseCase;
use crate::application::invoice::{CreateInvoiceUseCase, DeleteInvoiceUseCase, UpdateInvoiceUseCase};

use super::handlers::{invoices_web, web_auth};

/// Configure invoice form routes
///
/// # Routes
///
/// - POST /dashboard/invoices - Create an invoice
/// - POST /dashboard/invoices/{id} - Update an invoice
/// - POST /dashboard/invoices/{id}/delete - Delete an invoice
pub fn configure_invoice_routes(
  cfg: &mut web::ServiceConfig,
  create_use_case: Arc<CreateInvoiceUseCase>,
  update_use_case: Arc<UpdateInvoiceUseCase>,
  delete_use_case: Arc<DeleteInvoiceUseCase>,
) {
  cfg
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(update_use_case))
    .app_data(web::Data::new(delete_use_case))
    .route(
      "/dashboard/invoices",
      web::post().to(invoices_web::create_invoice_submit),
    )
    .route(
      "/dashboard/invoices/{id}",
      web::post().to(invoices_web::update_invoice_submit),
    )
    .route(
      "/dashboard/invoices/{id}/delete",
      web::post().to(invoices_web::delete_invoice_submit),
    );
}

/// Configure authentication routes
///
/// # Routes
///
/// - POST /login - Verify credentials through the sign-in provider
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  authenticate_use_case: Arc<AuthenticateUseCase>,
) {
  cfg
    .app_data(web::Data::new(authenticate_use_case))
    .route("/login", web::post().to(web_auth::login_submit));
}
