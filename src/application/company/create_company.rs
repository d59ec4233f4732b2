use std::sync::Arc;

use crate::domain::company::{Company, CompanyError, CompanyService};

#[derive(Debug, Clone)]
pub struct CreateCompanyCommand {
  pub name: Option<String>,
  pub description: Option<String>,
}

pub struct CreateCompanyUseCase {
  company_service: Arc<CompanyService>,
}

impl CreateCompanyUseCase {
  pub fn new(company_service: Arc<CompanyService>) -> Self {
    Self { company_service }
  }

  pub async fn execute(&self, command: CreateCompanyCommand) -> Result<Company, CompanyError> {
    let company = self
      .company_service
      .create_company(command.name, command.description)
      .await?;

    tracing::info!(code = %company.code, "Company created");
    Ok(company)
  }
}
