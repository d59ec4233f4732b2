use serde::{Deserialize, Serialize};

use super::value_objects::CompanyCode;

/// Company as persisted in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
  pub code: String,
  pub name: String,
  pub description: Option<String>,
}

/// Projection used when listing companies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
  pub code: String,
  pub name: String,
}

/// Company enriched with the ids of the invoices billed to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetails {
  pub company: Company,
  pub invoices: Vec<i32>,
}

/// Insert payload for a company.
///
/// Fields stay optional all the way to the store: a request that omits
/// `name` ends up without a code and is rejected by the table constraints.
#[derive(Debug, Clone)]
pub struct NewCompany {
  pub code: Option<CompanyCode>,
  pub name: Option<String>,
  pub description: Option<String>,
}

impl NewCompany {
  /// Build an insert payload, deriving the code from the name
  pub fn new(name: Option<String>, description: Option<String>) -> Self {
    let code = name.as_deref().map(CompanyCode::from_name);
    Self {
      code,
      name,
      description,
    }
  }
}

/// In-place update of a company's mutable fields. The code never changes.
#[derive(Debug, Clone)]
pub struct CompanyUpdate {
  pub name: Option<String>,
  pub description: Option<String>,
}
