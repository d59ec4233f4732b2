use std::sync::Arc;

use crate::domain::company::{CompanyError, CompanyService};

#[derive(Debug, Clone)]
pub struct DeleteCompanyCommand {
  pub code: String,
}

pub struct DeleteCompanyUseCase {
  company_service: Arc<CompanyService>,
}

impl DeleteCompanyUseCase {
  pub fn new(company_service: Arc<CompanyService>) -> Self {
    Self { company_service }
  }

  pub async fn execute(&self, command: DeleteCompanyCommand) -> Result<(), CompanyError> {
    self.company_service.delete_company(&command.code).await?;

    tracing::info!(code = %command.code, "Company deleted");
    Ok(())
  }
}
