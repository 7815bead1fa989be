use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ContactService;
use crate::models::{ApiResponse, ErrorCode, contact::requests::ContactListParams};

pub async fn list_inquiries(
    service: &ContactService,
    request: &HttpRequest,
    query: ContactListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    match storage.list_contact_inquiries(page, size).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Contact inquiries retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve contact inquiries: {e}"),
            )),
        ),
    }
}
