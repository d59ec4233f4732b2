//! In-memory store for tests.
//!
//! Implements both repository ports over shared maps and rejects the same
//! writes the PostgreSQL schema rejects: NULL in NOT NULL columns, duplicate
//! codes or names, unknown `comp_code`, non-positive amounts. Deleting a
//! company cascades to its invoices.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::company::{
  Company, CompanyError, CompanyRepository, CompanySummary, CompanyUpdate, NewCompany,
};
use crate::domain::errors::RepositoryError;
use crate::domain::invoice::{
  Invoice, InvoiceDetails, InvoiceError, InvoiceRepository, InvoiceSummary, InvoiceUpdate,
  NewInvoice,
};

#[derive(Debug, Default)]
struct State {
  companies: BTreeMap<String, Company>,
  invoices: BTreeMap<i32, Invoice>,
  next_invoice_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
  state: Arc<Mutex<State>>,
}

fn not_null(column: &str) -> RepositoryError {
  RepositoryError::ConstraintViolation(format!(
    "null value in column \"{}\" violates not-null constraint",
    column
  ))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

impl InMemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Companies `apple` and `ibm`, invoices 1 and 2 for apple (2 paid) and 3 for ibm
  pub fn seeded() -> Self {
    let store = Self::new();
    {
      let mut state = store.lock();
      for (code, name, description) in [
        ("apple", "Apple", "Maker of OSX."),
        ("ibm", "IBM", "Big blue."),
      ] {
        state.companies.insert(
          code.to_string(),
          Company {
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
          },
        );
      }

      let seed = [
        ("apple", 100.0, false, date(2018, 1, 1), None),
        ("apple", 200.0, true, date(2018, 2, 1), Some(date(2018, 2, 2))),
        ("ibm", 300.0, false, date(2018, 3, 1), None),
      ];
      for (comp_code, amt, paid, add_date, paid_date) in seed {
        state.next_invoice_id += 1;
        let id = state.next_invoice_id;
        state.invoices.insert(
          id,
          Invoice {
            id,
            comp_code: comp_code.to_string(),
            amt,
            paid,
            add_date,
            paid_date,
          },
        );
      }
    }
    store
  }

  fn lock(&self) -> MutexGuard<'_, State> {
    self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

fn check_amount(amt: Option<f64>) -> Result<f64, RepositoryError> {
  let amt = amt.ok_or_else(|| not_null("amt"))?;
  if amt <= 0.0 {
    return Err(RepositoryError::ConstraintViolation(
      "new row for relation \"invoices\" violates check constraint \"invoices_amt_check\""
        .to_string(),
    ));
  }
  Ok(amt)
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
  async fn list(&self) -> Result<Vec<CompanySummary>, CompanyError> {
    let state = self.lock();
    let mut companies: Vec<_> = state
      .companies
      .values()
      .map(|c| CompanySummary {
        code: c.code.clone(),
        name: c.name.clone(),
      })
      .collect();
    companies.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(companies)
  }

  async fn find_by_code(&self, code: &str) -> Result<Option<Company>, CompanyError> {
    Ok(self.lock().companies.get(code).cloned())
  }

  async fn find_invoice_ids(&self, code: &str) -> Result<Vec<i32>, CompanyError> {
    Ok(
      self
        .lock()
        .invoices
        .values()
        .filter(|i| i.comp_code == code)
        .map(|i| i.id)
        .collect(),
    )
  }

  async fn create(&self, company: NewCompany) -> Result<Company, CompanyError> {
    let mut state = self.lock();
    let code = company.code.ok_or_else(|| not_null("code"))?.into_inner();
    let name = company.name.ok_or_else(|| not_null("name"))?;

    if state.companies.contains_key(&code) || state.companies.values().any(|c| c.name == name) {
      return Err(RepositoryError::DuplicateKey(format!("company {} already exists", code)).into());
    }

    let created = Company {
      code: code.clone(),
      name,
      description: company.description,
    };
    state.companies.insert(code, created.clone());
    Ok(created)
  }

  async fn update(
    &self,
    code: &str,
    update: CompanyUpdate,
  ) -> Result<Option<Company>, CompanyError> {
    let mut state = self.lock();
    if !state.companies.contains_key(code) {
      return Ok(None);
    }

    let name = update.name.ok_or_else(|| not_null("name"))?;
    if state
      .companies
      .values()
      .any(|c| c.code != code && c.name == name)
    {
      return Err(RepositoryError::DuplicateKey(format!("name {} already exists", name)).into());
    }

    let company = state
      .companies
      .get_mut(code)
      .ok_or_else(|| RepositoryError::QueryFailed("row vanished".to_string()))?;
    company.name = name;
    company.description = update.description;
    Ok(Some(company.clone()))
  }

  async fn delete(&self, code: &str) -> Result<bool, CompanyError> {
    let mut state = self.lock();
    let removed = state.companies.remove(code).is_some();
    if removed {
      state.invoices.retain(|_, i| i.comp_code != code);
    }
    Ok(removed)
  }
}

#[async_trait]
impl InvoiceRepository for InMemoryStore {
  async fn list(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    Ok(
      self
        .lock()
        .invoices
        .values()
        .map(|i| InvoiceSummary {
          id: i.id,
          comp_code: i.comp_code.clone(),
        })
        .collect(),
    )
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, InvoiceError> {
    Ok(self.lock().invoices.get(&id).cloned())
  }

  async fn find_details(&self, id: i32) -> Result<Option<InvoiceDetails>, InvoiceError> {
    let state = self.lock();
    let details = state.invoices.get(&id).and_then(|invoice| {
      state
        .companies
        .get(&invoice.comp_code)
        .map(|company| InvoiceDetails {
          id: invoice.id,
          amt: invoice.amt,
          paid: invoice.paid,
          add_date: invoice.add_date,
          paid_date: invoice.paid_date,
          company: company.clone(),
        })
    });
    Ok(details)
  }

  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
    let mut state = self.lock();
    let comp_code = invoice.comp_code.ok_or_else(|| not_null("comp_code"))?;
    let amt = check_amount(invoice.amt)?;

    if !state.companies.contains_key(&comp_code) {
      return Err(
        RepositoryError::ForeignKeyViolation(format!("company {} does not exist", comp_code))
          .into(),
      );
    }

    state.next_invoice_id += 1;
    let created = Invoice {
      id: state.next_invoice_id,
      comp_code,
      amt,
      paid: false,
      add_date: Utc::now().date_naive(),
      paid_date: None,
    };
    state.invoices.insert(created.id, created.clone());
    Ok(created)
  }

  async fn update(&self, id: i32, update: InvoiceUpdate) -> Result<Option<Invoice>, InvoiceError> {
    let mut state = self.lock();
    let Some(invoice) = state.invoices.get_mut(&id) else {
      return Ok(None);
    };

    let amt = check_amount(update.amt)?;
    let paid = update.paid.ok_or_else(|| not_null("paid"))?;
    invoice.amt = amt;
    invoice.paid = paid;
    invoice.paid_date = update.paid_date;
    Ok(Some(invoice.clone()))
  }

  async fn delete(&self, id: i32) -> Result<bool, InvoiceError> {
    Ok(self.lock().invoices.remove(&id).is_some())
  }
}
