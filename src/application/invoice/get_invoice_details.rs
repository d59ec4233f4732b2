use std::sync::Arc;

use crate::domain::invoice::{InvoiceDetails, InvoiceError, InvoiceService};

#[derive(Debug, Clone)]
pub struct GetInvoiceDetailsCommand {
  pub invoice_id: i32,
}

pub struct GetInvoiceDetailsUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetInvoiceDetailsUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub async fn execute(
    &self,
    command: GetInvoiceDetailsCommand,
  ) -> Result<InvoiceDetails, InvoiceError> {
    self.invoice_service.get_invoice(command.invoice_id).await
  }
}
