use async_trait::async_trait;

use super::{
  entities::{Company, CompanySummary, CompanyUpdate, NewCompany},
  errors::CompanyError,
};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
  /// All companies ordered by name
  async fn list(&self) -> Result<Vec<CompanySummary>, CompanyError>;
  async fn find_by_code(&self, code: &str) -> Result<Option<Company>, CompanyError>;

  /// Ids of the invoices whose `comp_code` is `code`, ascending
  async fn find_invoice_ids(&self, code: &str) -> Result<Vec<i32>, CompanyError>;

  async fn create(&self, company: NewCompany) -> Result<Company, CompanyError>;

  /// Returns `None` when no row has the given code
  async fn update(
    &self,
    code: &str,
    update: CompanyUpdate,
  ) -> Result<Option<Company>, CompanyError>;

  /// Returns `false` when nothing was deleted
  async fn delete(&self, code: &str) -> Result<bool, CompanyError>;
}
