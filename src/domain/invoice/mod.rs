pub mod errors;
pub mod forms;
pub mod ports;
pub mod value_objects;

pub use errors::InvoiceError;
pub use forms::{InvoiceFieldErrors, InvoiceFormData, InvoiceInput, MutationState};
pub use ports::{InvoiceChanges, InvoiceStore, NewInvoice, PageCache};
pub use value_objects::{Amount, InvoiceStatus, ValueObjectError};
