use std::sync::Arc;

use crate::domain::company::{Company, CompanyError, CompanyService, CompanyUpdate};

#[derive(Debug, Clone)]
pub struct UpdateCompanyCommand {
  pub code: String,
  pub name: Option<String>,
  pub description: Option<String>,
}

pub struct UpdateCompanyUseCase {
  company_service: Arc<CompanyService>,
}

impl UpdateCompanyUseCase {
  pub fn new(company_service: Arc<CompanyService>) -> Self {
    Self { company_service }
  }

  pub async fn execute(&self, command: UpdateCompanyCommand) -> Result<Company, CompanyError> {
    let update = CompanyUpdate {
      name: command.name,
      description: command.description,
    };

    self
      .company_service
      .update_company(&command.code, update)
      .await
  }
}
