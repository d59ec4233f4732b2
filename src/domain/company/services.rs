use std::sync::Arc;

use super::{
  entities::{Company, CompanyDetails, CompanySummary, CompanyUpdate, NewCompany},
  errors::CompanyError,
  ports::CompanyRepository,
};

/// Company service implementing the company resource operations
pub struct CompanyService {
  company_repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
  pub fn new(company_repo: Arc<dyn CompanyRepository>) -> Self {
    Self { company_repo }
  }

  /// List all companies ordered by name
  pub async fn list_companies(&self) -> Result<Vec<CompanySummary>, CompanyError> {
    self.company_repo.list().await
  }

  /// Fetch a company together with the ids of its invoices
  pub async fn get_company(&self, code: &str) -> Result<CompanyDetails, CompanyError> {
    let company = self
      .company_repo
      .find_by_code(code)
      .await?
      .ok_or_else(|| CompanyError::NotFound(code.to_string()))?;

    let invoices = self.company_repo.find_invoice_ids(code).await?;

    Ok(CompanyDetails { company, invoices })
  }

  /// Create a company. Code collisions are left for the store to reject.
  pub async fn create_company(
    &self,
    name: Option<String>,
    description: Option<String>,
  ) -> Result<Company, CompanyError> {
    let company = NewCompany::new(name, description);
    tracing::debug!(code = ?company.code, "Creating company");
    self.company_repo.create(company).await
  }

  /// Update name and description of an existing company
  pub async fn update_company(
    &self,
    code: &str,
    update: CompanyUpdate,
  ) -> Result<Company, CompanyError> {
    self
      .company_repo
      .update(code, update)
      .await?
      .ok_or_else(|| CompanyError::NotFound(code.to_string()))
  }

  pub async fn delete_company(&self, code: &str) -> Result<(), CompanyError> {
    if !self.company_repo.delete(code).await? {
      return Err(CompanyError::NotFound(code.to_string()));
    }

    tracing::debug!(code, "Company deleted");
    Ok(())
  }
}
