use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
  adapters::http::{
    dtos::{
      CreateInvoiceRequest, InvoiceDetailsDto, InvoiceDto, InvoiceListResponse, InvoiceResponse,
      StatusResponse, UpdateInvoiceRequest,
    },
    errors::ApiError,
    extractors::JsonBody,
  },
  application::invoice::*,
};

/// List invoices
/// GET /invoices
pub async fn list_invoices_handler(
  use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let invoices = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(InvoiceListResponse {
    invoices: invoices.into_iter().map(Into::into).collect(),
  }))
}

/// Get invoice with its company
/// GET /invoices/{id}
pub async fn get_invoice_handler(
  invoice_id: web::Path<i32>,
  use_case: web::Data<Arc<GetInvoiceDetailsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = GetInvoiceDetailsCommand {
    invoice_id: *invoice_id,
  };

  let details = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(InvoiceResponse {
    invoice: InvoiceDetailsDto::from(details),
  }))
}

/// Create invoice
/// POST /invoices
pub async fn create_invoice_handler(
  request: JsonBody<CreateInvoiceRequest>,
  use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();
  let command = CreateInvoiceCommand {
    comp_code: request.comp_code,
    amt: request.amt,
  };

  let invoice = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(InvoiceResponse {
    invoice: InvoiceDto::from(invoice),
  }))
}

/// Update invoice amount and paid flag
/// PUT /invoices/{id}
pub async fn update_invoice_handler(
  invoice_id: web::Path<i32>,
  request: JsonBody<UpdateInvoiceRequest>,
  use_case: web::Data<Arc<UpdateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner();
  let command = UpdateInvoiceCommand {
    invoice_id: *invoice_id,
    amt: request.amt,
    paid: request.paid,
  };

  let invoice = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(InvoiceResponse {
    invoice: InvoiceDto::from(invoice),
  }))
}

/// Delete invoice
/// DELETE /invoices/{id}
pub async fn delete_invoice_handler(
  invoice_id: web::Path<i32>,
  use_case: web::Data<Arc<DeleteInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let command = DeleteInvoiceCommand {
    invoice_id: *invoice_id,
  };

  use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(StatusResponse::deleted()))
}
