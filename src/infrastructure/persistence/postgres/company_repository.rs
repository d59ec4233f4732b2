use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::company::{
  Company, CompanyError, CompanyRepository, CompanySummary, CompanyUpdate, NewCompany,
};

#[derive(Debug, FromRow)]
struct CompanyRow {
  code: String,
  name: String,
  description: Option<String>,
}

impl From<CompanyRow> for Company {
  fn from(row: CompanyRow) -> Self {
    Company {
      code: row.code,
      name: row.name,
      description: row.description,
    }
  }
}

#[derive(Debug, FromRow)]
struct CompanySummaryRow {
  code: String,
  name: String,
}

impl From<CompanySummaryRow> for CompanySummary {
  fn from(row: CompanySummaryRow) -> Self {
    CompanySummary {
      code: row.code,
      name: row.name,
    }
  }
}

pub struct PostgresCompanyRepository {
  pool: PgPool,
}

impl PostgresCompanyRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
  async fn list(&self) -> Result<Vec<CompanySummary>, CompanyError> {
    let rows = sqlx::query_as::<_, CompanySummaryRow>(
      r#"
            SELECT code, name
            FROM companies
            ORDER BY name
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(CompanySummary::from).collect())
  }

  async fn find_by_code(&self, code: &str) -> Result<Option<Company>, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            SELECT code, name, description
            FROM companies
            WHERE code = $1
            "#,
    )
    .bind(code)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Company::from))
  }

  async fn find_invoice_ids(&self, code: &str) -> Result<Vec<i32>, CompanyError> {
    let ids = sqlx::query_scalar::<_, i32>(
      r#"
            SELECT id
            FROM invoices
            WHERE comp_code = $1
            ORDER BY id
            "#,
    )
    .bind(code)
    .fetch_all(&self.pool)
    .await?;

    Ok(ids)
  }

  async fn create(&self, company: NewCompany) -> Result<Company, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
    )
    .bind(company.code.as_ref().map(|c| c.as_str()))
    .bind(company.name.as_deref())
    .bind(company.description.as_deref())
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn update(
    &self,
    code: &str,
    update: CompanyUpdate,
  ) -> Result<Option<Company>, CompanyError> {
    let row = sqlx::query_as::<_, CompanyRow>(
      r#"
            UPDATE companies
            SET name = $2, description = $3
            WHERE code = $1
            RETURNING code, name, description
            "#,
    )
    .bind(code)
    .bind(update.name.as_deref())
    .bind(update.description.as_deref())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Company::from))
  }

  async fn delete(&self, code: &str) -> Result<bool, CompanyError> {
    let result = sqlx::query("DELETE FROM companies WHERE code = $1")
      .bind(code)
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected() > 0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::errors::RepositoryError;
  use crate::infrastructure::persistence::postgres::test_support::setup_seeded_db;

  #[tokio::test]
  async fn test_list_orders_by_name() {
    let (pool, _container) = setup_seeded_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    let companies = repo.list().await.unwrap();

    assert_eq!(
      companies,
      vec![
        CompanySummary {
          code: "apple".to_string(),
          name: "Apple".to_string(),
        },
        CompanySummary {
          code: "ibm".to_string(),
          name: "IBM".to_string(),
        },
      ]
    );
  }

  #[tokio::test]
  async fn test_find_invoice_ids() {
    let (pool, _container) = setup_seeded_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    assert_eq!(repo.find_invoice_ids("apple").await.unwrap(), vec![1, 2]);
    assert_eq!(repo.find_invoice_ids("ibm").await.unwrap(), vec![3]);
    assert!(repo.find_invoice_ids("nope").await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_create_and_find() {
    let (pool, _container) = setup_seeded_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    let created = repo
      .create(NewCompany::new(
        Some("TestCompany".to_string()),
        Some("test".to_string()),
      ))
      .await
      .unwrap();

    assert_eq!(created.code, "testcompany");
    let found = repo.find_by_code("testcompany").await.unwrap();
    assert_eq!(found, Some(created));
  }

  #[tokio::test]
  async fn test_create_duplicate_code() {
    let (pool, _container) = setup_seeded_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    let result = repo
      .create(NewCompany::new(Some("IBM".to_string()), Some("test".to_string())))
      .await;

    match result.unwrap_err() {
      CompanyError::Repository(RepositoryError::DuplicateKey(_)) => {}
      other => panic!("Expected Repository(DuplicateKey) error, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_create_without_name_is_rejected() {
    let (pool, _container) = setup_seeded_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    let result = repo.create(NewCompany::new(None, None)).await;

    match result.unwrap_err() {
      CompanyError::Repository(RepositoryError::ConstraintViolation(_)) => {}
      other => panic!("Expected Repository(ConstraintViolation) error, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_update() {
    let (pool, _container) = setup_seeded_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    let updated = repo
      .update(
        "ibm",
        CompanyUpdate {
          name: Some("IBMTest".to_string()),
          description: Some("test".to_string()),
        },
      )
      .await
      .unwrap();

    assert_eq!(
      updated,
      Some(Company {
        code: "ibm".to_string(),
        name: "IBMTest".to_string(),
        description: Some("test".to_string()),
      })
    );

    let missing = repo
      .update(
        "test",
        CompanyUpdate {
          name: Some("Test".to_string()),
          description: None,
        },
      )
      .await
      .unwrap();
    assert!(missing.is_none());
  }

  #[tokio::test]
  async fn test_update_without_name_is_rejected() {
    let (pool, _container) = setup_seeded_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    let result = repo
      .update(
        "ibm",
        CompanyUpdate {
          name: None,
          description: None,
        },
      )
      .await;

    assert!(result.is_err());
  }

  #[tokio::test]
  async fn test_delete_cascades_to_invoices() {
    let (pool, _container) = setup_seeded_db().await;
    let repo = PostgresCompanyRepository::new(pool);

    assert!(repo.delete("apple").await.unwrap());
    assert!(!repo.delete("apple").await.unwrap());
    assert!(repo.find_invoice_ids("apple").await.unwrap().is_empty());
  }
}
