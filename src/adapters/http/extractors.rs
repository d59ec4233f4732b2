use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use super::errors::ApiError;
use super::middleware::RequestIdExt;

/// JSON request body that tolerates a missing payload
///
/// An empty (or whitespace-only) body yields `T::default()`, so absent fields
/// reach the store as NULL. The content type is not checked. A body that is
/// present but is not valid JSON for `T` is rejected with 400.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T> FromRequest for JsonBody<T>
where
  T: DeserializeOwned + Default + 'static,
{
  type Error = actix_web::Error;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
    let request_id = req.request_id();
    let body = web::Bytes::from_request(req, payload);

    Box::pin(async move {
      let body = body.await?;

      if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonBody(T::default()));
      }

      serde_json::from_slice(&body).map(JsonBody).map_err(|e| {
        tracing::debug!(request_id = ?request_id, "Rejected request body: {}", e);
        ApiError::BadRequest(format!("Json deserialize error: {}", e)).into()
      })
    })
  }
}
