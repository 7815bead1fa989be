use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, profiles::entities::Role};

pub async fn delete_exam(
    service: &ExamService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let Some(profile) = RequireJWT::extract_profile(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing profile",
        )));
    };

    let storage = service.get_storage(request)?;

    let exam = match storage.get_exam_by_id(id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "Exam not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExamDeleteFailed,
                    format!("Failed to delete exam: {e}"),
                )),
            );
        }
    };

    // 教师只能删除自己创建的考试
    if profile.role != Role::Admin && exam.created_by != profile.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only the creator or an administrator can delete this exam",
        )));
    }

    match storage.delete_exam(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Exam deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExamDeleteFailed,
                format!("Failed to delete exam: {e}"),
            )),
        ),
    }
}
