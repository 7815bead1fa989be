use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exams::requests::{CreateExamRequest, ExamListParams};
use crate::models::profiles::entities::Role;
use crate::services::ExamService;
use crate::utils::SafeIDI64;

static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

pub async fn list_exams(
    req: HttpRequest,
    query: web::Query<ExamListParams>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(&req, query.into_inner()).await
}

pub async fn create_exam(
    req: HttpRequest,
    exam: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(&req, exam.into_inner()).await
}

pub async fn delete_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(&req, exam_id.0).await
}

// 所有已审批用户可查看；创建与删除的权限在服务层检查
pub fn configure_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireRole::new_any(Role::all_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_exams))
            .route("", web::post().to(create_exam))
            .route("/{id}", web::delete().to(delete_exam)),
    );
}
