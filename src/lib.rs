//! BizTime: a REST API over companies and the invoices billed to them.
//!
//! Layers:
//! - `domain`: entities, repository ports and the company/invoice services
//! - `application`: one use case per resource operation
//! - `infrastructure`: configuration and PostgreSQL repositories
//! - `adapters`: the actix-web HTTP surface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
