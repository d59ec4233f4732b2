use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::company::{Company, CompanyDetails, CompanySummary};
use crate::domain::invoice::{Invoice, InvoiceDetails, InvoiceSummary};

// Request bodies keep every field optional. Missing values are passed on
// as NULL and the database constraints decide.

/// Request body for creating or updating a company
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyRequest {
  pub name: Option<String>,
  pub description: Option<String>,
}

/// Request body for creating an invoice
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInvoiceRequest {
  pub comp_code: Option<String>,
  pub amt: Option<f64>,
}

/// Request body for updating an invoice
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInvoiceRequest {
  pub amt: Option<f64>,
  pub paid: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanySummaryDto {
  pub code: String,
  pub name: String,
}

impl From<CompanySummary> for CompanySummaryDto {
  fn from(company: CompanySummary) -> Self {
    Self {
      code: company.code,
      name: company.name,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyDto {
  pub code: String,
  pub name: String,
  pub description: Option<String>,
}

impl From<Company> for CompanyDto {
  fn from(company: Company) -> Self {
    Self {
      code: company.code,
      name: company.name,
      description: company.description,
    }
  }
}

/// Company with the ids of its invoices
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetailsDto {
  pub code: String,
  pub name: String,
  pub description: Option<String>,
  pub invoices: Vec<i32>,
}

impl From<CompanyDetails> for CompanyDetailsDto {
  fn from(details: CompanyDetails) -> Self {
    Self {
      code: details.company.code,
      name: details.company.name,
      description: details.company.description,
      invoices: details.invoices,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyListResponse {
  pub companies: Vec<CompanySummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse<T> {
  pub company: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummaryDto {
  pub id: i32,
  pub comp_code: String,
}

impl From<InvoiceSummary> for InvoiceSummaryDto {
  fn from(invoice: InvoiceSummary) -> Self {
    Self {
      id: invoice.id,
      comp_code: invoice.comp_code,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDto {
  pub id: i32,
  pub comp_code: String,
  pub amt: f64,
  pub paid: bool,
  pub add_date: NaiveDate,
  pub paid_date: Option<NaiveDate>,
}

impl From<Invoice> for InvoiceDto {
  fn from(invoice: Invoice) -> Self {
    Self {
      id: invoice.id,
      comp_code: invoice.comp_code,
      amt: invoice.amt,
      paid: invoice.paid,
      add_date: invoice.add_date,
      paid_date: invoice.paid_date,
    }
  }
}

/// Invoice with its company nested under `company`
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetailsDto {
  pub id: i32,
  pub amt: f64,
  pub paid: bool,
  pub add_date: NaiveDate,
  pub paid_date: Option<NaiveDate>,
  pub company: CompanyDto,
}

impl From<InvoiceDetails> for InvoiceDetailsDto {
  fn from(details: InvoiceDetails) -> Self {
    Self {
      id: details.id,
      amt: details.amt,
      paid: details.paid,
      add_date: details.add_date,
      paid_date: details.paid_date,
      company: details.company.into(),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceListResponse {
  pub invoices: Vec<InvoiceSummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceResponse<T> {
  pub invoice: T,
}

/// Confirmation returned by delete endpoints
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
  pub status: &'static str,
}

impl StatusResponse {
  pub fn deleted() -> Self {
    Self { status: "DELETED" }
  }
}

/// Error response envelope: `{"error": {"message": ..., "status": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
  pub message: String,
  pub status: u16,
}
