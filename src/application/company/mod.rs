pub mod create_company;
pub mod delete_company;
pub mod get_company;
pub mod list_companies;
pub mod update_company;

pub use create_company::{CreateCompanyCommand, CreateCompanyUseCase};
pub use delete_company::{DeleteCompanyCommand, DeleteCompanyUseCase};
pub use get_company::{GetCompanyCommand, GetCompanyUseCase};
pub use list_companies::ListCompaniesUseCase;
pub use update_company::{UpdateCompanyCommand, UpdateCompanyUseCase};
