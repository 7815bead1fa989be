use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::models::{
    ApiResponse, ErrorCode,
    transfer_certificates::requests::{CertificateListParams, CertificateListQuery},
};

pub async fn list_certificates(
    service: &CertificateService,
    request: &HttpRequest,
    query: CertificateListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = CertificateListQuery {
        page,
        size,
        student_id: query.student_id,
    };

    match storage.list_certificates_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Transfer certificates retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve transfer certificates: {e}"),
            )),
        ),
    }
}
