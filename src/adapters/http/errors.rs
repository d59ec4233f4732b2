use actix_web::{
  HttpRequest, HttpResponse,
  error::{PathError, ResponseError},
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::company::CompanyError;
use crate::domain::invoice::InvoiceError;

use super::dtos::{ErrorBody, ErrorResponse};
use super::middleware::RequestIdExt;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
  /// Lookup or mutation matched no row (404 Not Found)
  NotFound(String),

  /// Request body could not be parsed (400 Bad Request)
  BadRequest(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let message = match self {
      ApiError::NotFound(msg) | ApiError::BadRequest(msg) => msg.clone(),
      ApiError::Internal(msg) => {
        // Don't expose internal error details to clients
        tracing::error!("Internal error: {}", msg);
        "Internal Server Error".to_string()
      }
    };

    let error_response = ErrorResponse {
      error: ErrorBody {
        message,
        status: status.as_u16(),
      },
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert CompanyError to ApiError
impl From<CompanyError> for ApiError {
  fn from(error: CompanyError) -> Self {
    match error {
      CompanyError::NotFound(_) => ApiError::NotFound(error.to_string()),
      CompanyError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

/// Convert InvoiceError to ApiError
impl From<InvoiceError> for ApiError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::NotFound(_) => ApiError::NotFound(error.to_string()),
      InvoiceError::Repository(e) => ApiError::Internal(format!("Repository error: {}", e)),
    }
  }
}

/// Error handler for `web::PathConfig`: a segment that does not parse into the
/// expected identifier type cannot name an existing resource.
pub fn path_error_handler(error: PathError, req: &HttpRequest) -> actix_web::Error {
  tracing::debug!(
    request_id = ?req.request_id(),
    "Rejected path {}: {}",
    req.path(),
    error
  );
  ApiError::NotFound(format!("No resource at {}", req.path())).into()
}

/// Fallback for unmatched routes
pub async fn not_found() -> Result<HttpResponse, ApiError> {
  Err(ApiError::NotFound("Not Found".to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::errors::RepositoryError;
  use actix_web::body::to_bytes;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::NotFound("test".to_string()).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      ApiError::BadRequest("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_domain_error_conversion() {
    let api_error: ApiError = CompanyError::NotFound("apple".to_string()).into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError = InvoiceError::NotFound(7).into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    let api_error: ApiError =
      CompanyError::Repository(RepositoryError::DuplicateKey("code".to_string())).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let api_error: ApiError =
      InvoiceError::Repository(RepositoryError::ForeignKeyViolation("fk".to_string())).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[actix_web::test]
  async fn test_error_envelope() {
    let response = ApiError::from(InvoiceError::NotFound(0)).error_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
      json,
      serde_json::json!({"error": {"message": "No invoice with id 0", "status": 404}})
    );
  }

  #[actix_web::test]
  async fn test_internal_error_hides_details() {
    let response = ApiError::Internal("connection refused".to_string()).error_response();

    let body = to_bytes(response.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["message"], "Internal Server Error");
    assert_eq!(json["error"]["status"], 500);
  }
}
