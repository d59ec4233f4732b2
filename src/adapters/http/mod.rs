pub mod dtos;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorBody, ErrorResponse, StatusResponse};
pub use errors::{ApiError, not_found};
pub use extractors::JsonBody;
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{
  RouteDependencies, configure_company_routes, configure_invoice_routes, configure_routes,
};
