use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::domain::company::Company;
use crate::domain::invoice::{
  Invoice, InvoiceDetails, InvoiceSummary, InvoiceUpdate, NewInvoice, errors::InvoiceError,
  ports::InvoiceRepository,
};

#[derive(Debug, FromRow)]
struct InvoiceRow {
  id: i32,
  comp_code: String,
  amt: f64,
  paid: bool,
  add_date: NaiveDate,
  paid_date: Option<NaiveDate>,
}

impl From<InvoiceRow> for Invoice {
  fn from(row: InvoiceRow) -> Self {
    Invoice {
      id: row.id,
      comp_code: row.comp_code,
      amt: row.amt,
      paid: row.paid,
      add_date: row.add_date,
      paid_date: row.paid_date,
    }
  }
}

#[derive(Debug, FromRow)]
struct InvoiceSummaryRow {
  id: i32,
  comp_code: String,
}

/// Flat row of the invoice/company join
#[derive(Debug, FromRow)]
struct InvoiceDetailsRow {
  id: i32,
  comp_code: String,
  amt: f64,
  paid: bool,
  add_date: NaiveDate,
  paid_date: Option<NaiveDate>,
  name: String,
  description: Option<String>,
}

impl From<InvoiceDetailsRow> for InvoiceDetails {
  fn from(row: InvoiceDetailsRow) -> Self {
    InvoiceDetails {
      id: row.id,
      amt: row.amt,
      paid: row.paid,
      add_date: row.add_date,
      paid_date: row.paid_date,
      company: Company {
        code: row.comp_code,
        name: row.name,
        description: row.description,
      },
    }
  }
}

pub struct PostgresInvoiceRepository {
  pool: PgPool,
}

impl PostgresInvoiceRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
  async fn list(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    let rows = sqlx::query_as::<_, InvoiceSummaryRow>(
      r#"
            SELECT id, comp_code
            FROM invoices
            ORDER BY id
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(
      rows
        .into_iter()
        .map(|r| InvoiceSummary {
          id: r.id,
          comp_code: r.comp_code,
        })
        .collect(),
    )
  }

  async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Invoice::from))
  }

  async fn find_details(&self, id: i32) -> Result<Option<InvoiceDetails>, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceDetailsRow>(
      r#"
            SELECT i.id, i.comp_code, i.amt, i.paid, i.add_date, i.paid_date,
                   c.name, c.description
            FROM invoices AS i
            INNER JOIN companies AS c ON (i.comp_code = c.code)
            WHERE i.id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(InvoiceDetails::from))
  }

  async fn create(&self, invoice: NewInvoice) -> Result<Invoice, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            INSERT INTO invoices (comp_code, amt)
            VALUES ($1, $2)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
    )
    .bind(invoice.comp_code.as_deref())
    .bind(invoice.amt)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn update(&self, id: i32, update: InvoiceUpdate) -> Result<Option<Invoice>, InvoiceError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
      r#"
            UPDATE invoices
            SET amt = $1, paid = $2, paid_date = $3
            WHERE id = $4
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
    )
    .bind(update.amt)
    .bind(update.paid)
    .bind(update.paid_date)
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Invoice::from))
  }

  async fn delete(&self, id: i32) -> Result<bool, InvoiceError> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected() > 0)
  }
}
