use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{
    ApiResponse, ErrorCode,
    exams::requests::{ExamListParams, ExamListQuery},
};

pub async fn list_exams(
    service: &ExamService,
    request: &HttpRequest,
    query: ExamListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.pagination.normalized();

    let list_query = ExamListQuery {
        page,
        size,
        class_name: query
            .class_name
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
    };

    match storage.list_exams_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Exam list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve exam list: {e}"),
            )),
        ),
    }
}
