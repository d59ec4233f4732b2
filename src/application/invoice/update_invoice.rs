use std::sync::Arc;

use crate::domain::invoice::{Invoice, InvoiceError, InvoiceService};

#[derive(Debug, Clone)]
pub struct UpdateInvoiceCommand {
  pub invoice_id: i32,
  pub amt: Option<f64>,
  pub paid: Option<bool>,
}

pub struct UpdateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl UpdateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(&self, command: UpdateInvoiceCommand) -> Result<Invoice, InvoiceError> {
    self
      .invoice_service
      .update_invoice(command.invoice_id, command.amt, command.paid)
      .await
  }
}
