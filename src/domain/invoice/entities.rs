use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::company::Company;

/// Invoice as persisted in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: i32,
  pub comp_code: String,
  pub amt: f64,
  pub paid: bool,
  pub add_date: NaiveDate,
  pub paid_date: Option<NaiveDate>,
}

/// Projection used when listing invoices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
  pub id: i32,
  pub comp_code: String,
}

/// Invoice with the company it is billed to embedded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetails {
  pub id: i32,
  pub amt: f64,
  pub paid: bool,
  pub add_date: NaiveDate,
  pub paid_date: Option<NaiveDate>,
  pub company: Company,
}

/// Insert payload; `paid`, `add_date` and `paid_date` come from store defaults
#[derive(Debug, Clone)]
pub struct NewInvoice {
  pub comp_code: Option<String>,
  pub amt: Option<f64>,
}

/// Values written by an invoice update
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceUpdate {
  pub amt: Option<f64>,
  pub paid: Option<bool>,
  pub paid_date: Option<NaiveDate>,
}

impl InvoiceUpdate {
  /// Build the update for an invoice whose stored payment date is
  /// `current_paid_date`.
  ///
  /// The payment date is stamped with `today` only when none is stored yet
  /// and the invoice is being marked paid. Marking it unpaid (or leaving
  /// `paid` out) clears the date, and staying paid keeps the stored one.
  /// The decision looks at the stored date, not the stored `paid` flag.
  pub fn new(
    amt: Option<f64>,
    paid: Option<bool>,
    current_paid_date: Option<NaiveDate>,
    today: NaiveDate,
  ) -> Self {
    let marked_paid = paid.unwrap_or(false);
    let paid_date = match current_paid_date {
      None if marked_paid => Some(today),
      _ if !marked_paid => None,
      current => current,
    };

    Self {
      amt,
      paid,
      paid_date,
    }
  }
}
