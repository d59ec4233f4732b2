use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
  adapters::http::{
    dtos::{
      CompanyDetailsDto, CompanyDto, CompanyListResponse, CompanyRequest, CompanyResponse,
      StatusResponse,
    },
    errors::ApiError,
    extractors::JsonBody,
  },
  application::company::*,
};

/// List companies
/// GET /companies
pub async fn list_companies_handler(
  use_case: web::Data<Arc<ListCompaniesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let companies = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(CompanyListResponse {
    companies: companies.into_iter().map(Into::into).collect(),
  }))
}

/// Get company with its invoice ids
/// GET /companies/{code}
pub async fn get_company_handler(
  code: web::Path<String>,
  use_case: web::Data<Arc<GetCompanyUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = GetCompanyCommand {
    code: code.into_inner(),
  };

  let details = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(CompanyResponse {
    company: CompanyDetailsDto::from(details),
  }))
}

/// Create company
/// POST /companies
pub async fn create_company_handler(
  request: JsonBody<CompanyRequest>,
  use_case: web::Data<Arc<CreateCompanyUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();
  let command = CreateCompanyCommand {
    name: request.name,
    description: request.description,
  };

  let company = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(CompanyResponse {
    company: CompanyDto::from(company),
  }))
}

/// Update company name and description
/// PUT /companies/{code}
pub async fn update_company_handler(
  code: web::Path<String>,
  request: JsonBody<CompanyRequest>,
  use_case: web::Data<Arc<UpdateCompanyUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();
  let command = UpdateCompanyCommand {
    code: code.into_inner(),
    name: request.name,
    description: request.description,
  };

  let company = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(CompanyResponse {
    company: CompanyDto::from(company),
  }))
}

/// Delete company
/// DELETE /companies/{code}
pub async fn delete_company_handler(
  code: web::Path<String>,
  use_case: web::Data<Arc<DeleteCompanyUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = DeleteCompanyCommand {
    code: code.into_inner(),
  };

  use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(StatusResponse::deleted()))
}
