//! Application layer
//!
//! One use case per resource operation. Use cases translate commands coming
//! from the HTTP adapter into calls on the domain services.

pub mod company;
pub mod invoice;
