use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    profiles::entities::Role,
    transfer_certificates::{
        entities::generate_certificate_number, requests::IssueCertificateRequest,
    },
};

const MAX_REASON_LENGTH: usize = 500;

fn validate_issue(certificate: &IssueCertificateRequest) -> Result<(), &'static str> {
    let reason = certificate.reason.trim();
    if reason.is_empty() {
        return Err("Reason for leaving is required");
    }
    if reason.chars().count() > MAX_REASON_LENGTH {
        return Err("Reason must be at most 500 characters");
    }
    if certificate.conduct.trim().is_empty() {
        return Err("Conduct remark is required");
    }
    Ok(())
}

pub async fn issue_certificate(
    service: &CertificateService,
    request: &HttpRequest,
    certificate: IssueCertificateRequest,
) -> ActixResult<HttpResponse> {
    let Some(issued_by) = RequireJWT::extract_profile_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing profile",
        )));
    };

    if let Err(msg) = validate_issue(&certificate) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request)?;

    // 学生必须存在且角色为 student
    match storage.get_profile_by_id(certificate.student_id).await {
        Ok(Some(student)) if student.role == Role::Student => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Transfer certificates can only be issued to students",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ProfileNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CertificateIssueFailed,
                    format!("Failed to issue certificate: {e}"),
                )),
            );
        }
    }

    let number = generate_certificate_number(chrono::Utc::now());

    match storage
        .issue_certificate(issued_by, number, certificate)
        .await
    {
        Ok(issued) => {
            tracing::info!(
                "Transfer certificate {} issued for student {}",
                issued.certificate_number,
                issued.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                issued,
                "Transfer certificate issued",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::CertificateIssueFailed,
                format!("Failed to issue certificate: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(reason: &str) -> IssueCertificateRequest {
        IssueCertificateRequest {
            student_id: 7,
            reason: reason.to_string(),
            leaving_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            conduct: "Good".to_string(),
        }
    }

    #[test]
    fn test_reason_is_required() {
        assert!(validate_issue(&request("Family relocation")).is_ok());
        assert!(validate_issue(&request("   ")).is_err());
        assert!(validate_issue(&request(&"r".repeat(501))).is_err());
    }
}
