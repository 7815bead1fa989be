use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::profiles::entities::Role;
use crate::models::transfer_certificates::requests::{
    CertificateListParams, IssueCertificateRequest,
};
use crate::services::CertificateService;
use crate::utils::SafeIDI64;

static CERTIFICATE_SERVICE: Lazy<CertificateService> = Lazy::new(CertificateService::new_lazy);

pub async fn list_certificates(
    req: HttpRequest,
    query: web::Query<CertificateListParams>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .list_certificates(&req, query.into_inner())
        .await
}

pub async fn issue_certificate(
    req: HttpRequest,
    certificate: web::Json<IssueCertificateRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .issue_certificate(&req, certificate.into_inner())
        .await
}

pub async fn get_certificate(
    req: HttpRequest,
    certificate_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .get_certificate(&req, certificate_id.0)
        .await
}

pub fn configure_certificate_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/transfer-certificates")
            .wrap(middlewares::RequireRole::new(&Role::Admin))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_certificates))
            .route("", web::post().to(issue_certificate))
            .route("/{id}", web::get().to(get_certificate)),
    );
}
