use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::application::company::{
  CreateCompanyUseCase, DeleteCompanyUseCase, GetCompanyUseCase, ListCompaniesUseCase,
  UpdateCompanyUseCase,
};
use crate::application::invoice::{
  CreateInvoiceUseCase, DeleteInvoiceUseCase, GetInvoiceDetailsUseCase, ListInvoicesUseCase,
  UpdateInvoiceUseCase,
};
use crate::domain::company::CompanyService;
use crate::domain::invoice::InvoiceService;

use super::errors::path_error_handler;
use super::handlers::company::{
  create_company_handler, delete_company_handler, get_company_handler, list_companies_handler,
  update_company_handler,
};
use super::handlers::invoice::{
  create_invoice_handler, delete_invoice_handler, get_invoice_handler, list_invoices_handler,
  update_invoice_handler,
};

/// Use cases served by the HTTP adapter
#[derive(Clone)]
pub struct RouteDependencies {
  pub list_companies_use_case: Arc<ListCompaniesUseCase>,
  pub get_company_use_case: Arc<GetCompanyUseCase>,
  pub create_company_use_case: Arc<CreateCompanyUseCase>,
  pub update_company_use_case: Arc<UpdateCompanyUseCase>,
  pub delete_company_use_case: Arc<DeleteCompanyUseCase>,
  pub list_invoices_use_case: Arc<ListInvoicesUseCase>,
  pub get_invoice_use_case: Arc<GetInvoiceDetailsUseCase>,
  pub create_invoice_use_case: Arc<CreateInvoiceUseCase>,
  pub update_invoice_use_case: Arc<UpdateInvoiceUseCase>,
  pub delete_invoice_use_case: Arc<DeleteInvoiceUseCase>,
}

impl RouteDependencies {
  /// Build every use case on top of the two domain services
  pub fn new(company_service: Arc<CompanyService>, invoice_service: Arc<InvoiceService>) -> Self {
    Self {
      list_companies_use_case: Arc::new(ListCompaniesUseCase::new(company_service.clone())),
      get_company_use_case: Arc::new(GetCompanyUseCase::new(company_service.clone())),
      create_company_use_case: Arc::new(CreateCompanyUseCase::new(company_service.clone())),
      update_company_use_case: Arc::new(UpdateCompanyUseCase::new(company_service.clone())),
      delete_company_use_case: Arc::new(DeleteCompanyUseCase::new(company_service)),
      list_invoices_use_case: Arc::new(ListInvoicesUseCase::new(invoice_service.clone())),
      get_invoice_use_case: Arc::new(GetInvoiceDetailsUseCase::new(invoice_service.clone())),
      create_invoice_use_case: Arc::new(CreateInvoiceUseCase::new(invoice_service.clone())),
      update_invoice_use_case: Arc::new(UpdateInvoiceUseCase::new(invoice_service.clone())),
      delete_invoice_use_case: Arc::new(DeleteInvoiceUseCase::new(invoice_service)),
    }
  }
}

/// Configure company routes
///
/// # Routes
///
/// - GET / - List companies
/// - POST / - Create a company
/// - GET /{code} - Get a company with its invoice ids
/// - PUT /{code} - Update a company
/// - DELETE /{code} - Delete a company
pub fn configure_company_routes(
  cfg: &mut web::ServiceConfig,
  list_use_case: Arc<ListCompaniesUseCase>,
  get_use_case: Arc<GetCompanyUseCase>,
  create_use_case: Arc<CreateCompanyUseCase>,
  update_use_case: Arc<UpdateCompanyUseCase>,
  delete_use_case: Arc<DeleteCompanyUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(get_use_case))
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(update_use_case))
    .app_data(web::Data::new(delete_use_case))
    .route("", web::get().to(list_companies_handler))
    .route("", web::post().to(create_company_handler))
    .route("/{code}", web::get().to(get_company_handler))
    .route("/{code}", web::put().to(update_company_handler))
    .route("/{code}", web::delete().to(delete_company_handler));
}

/// Configure invoice routes
///
/// # Routes
///
/// - GET / - List invoices
/// - POST / - Create an invoice
/// - GET /{id} - Get an invoice with its company
/// - PUT /{id} - Update amount and paid flag
/// - DELETE /{id} - Delete an invoice
pub fn configure_invoice_routes(
  cfg: &mut web::ServiceConfig,
  list_use_case: Arc<ListInvoicesUseCase>,
  get_use_case: Arc<GetInvoiceDetailsUseCase>,
  create_use_case: Arc<CreateInvoiceUseCase>,
  update_use_case: Arc<UpdateInvoiceUseCase>,
  delete_use_case: Arc<DeleteInvoiceUseCase>,
) {
  cfg
    .app_data(web::Data::new(list_use_case))
    .app_data(web::Data::new(get_use_case))
    .app_data(web::Data::new(create_use_case))
    .app_data(web::Data::new(update_use_case))
    .app_data(web::Data::new(delete_use_case))
    .route("", web::get().to(list_invoices_handler))
    .route("", web::post().to(create_invoice_handler))
    .route("/{id}", web::get().to(get_invoice_handler))
    .route("/{id}", web::put().to(update_invoice_handler))
    .route("/{id}", web::delete().to(delete_invoice_handler));
}

/// Configure the whole API: path error handler, both resource scopes
/// and the health check.
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// # use biztime::adapters::http::{RouteDependencies, configure_routes, not_found};
///
/// # fn example(deps: RouteDependencies) {
/// let app = App::new()
///   .configure(|cfg| configure_routes(cfg, deps))
///   .default_service(web::to(not_found));
/// # }
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig, deps: RouteDependencies) {
  cfg
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(web::scope("/companies").configure(|cfg| {
      configure_company_routes(
        cfg,
        deps.list_companies_use_case.clone(),
        deps.get_company_use_case.clone(),
        deps.create_company_use_case.clone(),
        deps.update_company_use_case.clone(),
        deps.delete_company_use_case.clone(),
      )
    }))
    .service(web::scope("/invoices").configure(|cfg| {
      configure_invoice_routes(
        cfg,
        deps.list_invoices_use_case.clone(),
        deps.get_invoice_use_case.clone(),
        deps.create_invoice_use_case.clone(),
        deps.update_invoice_use_case.clone(),
        deps.delete_invoice_use_case.clone(),
      )
    }))
    .route("/health", web::get().to(health_check));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
  HttpResponse::Ok().body("OK")
}
