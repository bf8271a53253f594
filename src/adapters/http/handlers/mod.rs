pub mod invoices_web;
pub mod web_auth;
