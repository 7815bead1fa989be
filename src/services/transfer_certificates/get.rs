use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_certificate(
    service: &CertificateService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_certificate_by_id(id).await {
        Ok(Some(certificate)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            certificate,
            "Transfer certificate retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CertificateNotFound,
            "Transfer certificate not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve transfer certificate: {e}"),
            )),
        ),
    }
}
