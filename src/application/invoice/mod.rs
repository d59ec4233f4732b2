pub mod create_invoice;
pub mod delete_invoice;
pub mod get_invoice_details;
pub mod list_invoices;
pub mod update_invoice;

pub use create_invoice::{CreateInvoiceCommand, CreateInvoiceUseCase};
pub use delete_invoice::{DeleteInvoiceCommand, DeleteInvoiceUseCase};
pub use get_invoice_details::{GetInvoiceDetailsCommand, GetInvoiceDetailsUseCase};
pub use list_invoices::ListInvoicesUseCase;
pub use update_invoice::{UpdateInvoiceCommand, UpdateInvoiceUseCase};
