pub mod company;
pub mod errors;
pub mod invoice;

pub use errors::RepositoryError;
