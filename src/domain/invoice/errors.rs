use thiserror::Error;

use crate::domain::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("No invoice with id {0}")]
  NotFound(i32),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for InvoiceError {
  fn from(error: sqlx::Error) -> Self {
    InvoiceError::Repository(RepositoryError::from(error))
  }
}
