use chrono::Utc;
use std::sync::Arc;

use super::entities::{Invoice, InvoiceDetails, InvoiceSummary, InvoiceUpdate, NewInvoice};
use super::errors::InvoiceError;
use super::ports::InvoiceRepository;

/// Invoice service implementing the invoice resource operations
pub struct InvoiceService {
  invoice_repo: Arc<dyn InvoiceRepository>,
}

impl InvoiceService {
  pub fn new(invoice_repo: Arc<dyn InvoiceRepository>) -> Self {
    Self { invoice_repo }
  }

  /// List all invoices ordered by id
  pub async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    self.invoice_repo.list().await
  }

  pub async fn get_invoice(&self, id: i32) -> Result<InvoiceDetails, InvoiceError> {
    self
      .invoice_repo
      .find_details(id)
      .await?
      .ok_or(InvoiceError::NotFound(id))
  }

  /// Create an invoice. The company reference is checked by the store only.
  pub async fn create_invoice(
    &self,
    comp_code: Option<String>,
    amt: Option<f64>,
  ) -> Result<Invoice, InvoiceError> {
    self
      .invoice_repo
      .create(NewInvoice { comp_code, amt })
      .await
  }

  /// Update amount and paid flag, deriving the payment date from the
  /// currently stored one.
  ///
  /// Read and write are separate statements; concurrent updates of the same
  /// invoice may interleave.
  pub async fn update_invoice(
    &self,
    id: i32,
    amt: Option<f64>,
    paid: Option<bool>,
  ) -> Result<Invoice, InvoiceError> {
    let current = self
      .invoice_repo
      .find_by_id(id)
      .await?
      .ok_or(InvoiceError::NotFound(id))?;

    let update = InvoiceUpdate::new(amt, paid, current.paid_date, Utc::now().date_naive());
    tracing::debug!(id, paid_date = ?update.paid_date, "Updating invoice");

    self
      .invoice_repo
      .update(id, update)
      .await?
      .ok_or(InvoiceError::NotFound(id))
  }

  pub async fn delete_invoice(&self, id: i32) -> Result<(), InvoiceError> {
    if !self.invoice_repo.delete(id).await? {
      return Err(InvoiceError::NotFound(id));
    }

    tracing::debug!(id, "Invoice deleted");
    Ok(())
  }
}
