use async_trait::async_trait;

use super::entities::{Invoice, InvoiceDetails, InvoiceSummary, InvoiceUpdate, NewInvoice};
use super::errors::InvoiceError;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  /// All invoices ordered by id
  async fn list(&self) -> Result<Vec<InvoiceSummary>, InvoiceError>;
  async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, InvoiceError>;

  /// Invoice joined with the company it is billed to
  async fn find_details(&self, id: i32) -> Result<Option<InvoiceDetails>, InvoiceError>;
  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError>;
  async fn update(&self, id: i32, update: InvoiceUpdate) -> Result<Option<Invoice>, InvoiceError>;
  async fn delete(&self, id: i32) -> Result<bool, InvoiceError>;
}
