use std::sync::Arc;

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceService};

#[derive(Debug, Clone)]
pub struct CreateInvoiceCommand {
  pub comp_code: Option<String>,
  pub amt: Option<f64>,
}

pub struct CreateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: CreateInvoiceCommand) -> Result<Invoice, InvoiceError> {
    let invoice = self
      .invoice_service
      .create_invoice(command.comp_code, command.amt)
      .await?;

    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "Invoice created");
    Ok(invoice)
  }
}
