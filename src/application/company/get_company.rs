use std::sync::Arc;

use crate::domain::company::{CompanyDetails, CompanyError, CompanyService};

#[derive(Debug, Clone)]
pub struct GetCompanyCommand {
  pub code: String,
}

pub struct GetCompanyUseCase {
  company_service: Arc<CompanyService>,
}

impl GetCompanyUseCase {
  pub fn new(company_service: Arc<CompanyService>) -> Self {
    Self { company_service }
  }

  pub async fn execute(&self, command: GetCompanyCommand) -> Result<CompanyDetails, CompanyError> {
    self.company_service.get_company(&command.code).await
  }
}
