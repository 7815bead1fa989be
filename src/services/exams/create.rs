use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, exams::requests::CreateExamRequest, profiles::entities::Role,
};

pub async fn create_exam(
    service: &ExamService,
    request: &HttpRequest,
    exam: CreateExamRequest,
) -> ActixResult<HttpResponse> {
    let Some(profile) = RequireJWT::extract_profile(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing profile",
        )));
    };

    if !Role::staff_roles().contains(&&profile.role) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only staff can schedule exams",
        )));
    }
    let created_by = profile.id;

    if let Err(msg) = exam.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request)?;

    match storage.create_exam(created_by, exam).await {
        Ok(exam) => {
            tracing::info!("Exam {} scheduled by profile {}", exam.id, created_by);
            Ok(HttpResponse::Created().json(ApiResponse::success(exam, "Exam created")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ExamCreationFailed,
                format!("Failed to create exam: {e}"),
            )),
        ),
    }
}
