use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ContactService;
use crate::models::{ApiResponse, ErrorCode, contact::requests::ContactRequest};
use crate::utils::validate::{validate_email, validate_full_name, validate_message, validate_phone};

/// 校验并规范化联系表单
pub fn normalize_inquiry(inquiry: ContactRequest) -> Result<ContactRequest, &'static str> {
    validate_full_name(&inquiry.name)?;
    let email = inquiry.email.trim().to_lowercase();
    validate_email(&email)?;
    let phone = inquiry
        .phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());
    if let Some(phone) = phone.as_deref() {
        validate_phone(phone)?;
    }
    validate_message(&inquiry.message)?;

    Ok(ContactRequest {
        name: inquiry.name.trim().to_string(),
        email,
        phone,
        message: inquiry.message.trim().to_string(),
    })
}

pub async fn submit_inquiry(
    service: &ContactService,
    request: &HttpRequest,
    inquiry: ContactRequest,
) -> ActixResult<HttpResponse> {
    let inquiry = match normalize_inquiry(inquiry) {
        Ok(inquiry) => inquiry,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
        }
    };

    let storage = service.get_storage(request)?;

    match storage.create_contact_inquiry(inquiry).await {
        Ok(saved) => {
            tracing::info!("Contact inquiry {} received", saved.id);
            Ok(HttpResponse::Created().json(ApiResponse::success_empty(
                "Thank you for reaching out. The school office will contact you shortly.",
            )))
        }
        Err(e) => {
            tracing::error!("Failed to store contact inquiry: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ContactSubmitFailed,
                    "Failed to submit your message, please try again later",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(phone: Option<&str>) -> ContactRequest {
        ContactRequest {
            name: "  Anil Verma ".to_string(),
            email: " Parent@Example.COM ".to_string(),
            phone: phone.map(str::to_string),
            message: " When does admission open? ".to_string(),
        }
    }

    #[test]
    fn test_inquiry_is_trimmed_and_lowercased() {
        let normalized = normalize_inquiry(inquiry(Some("  "))).unwrap();
        assert_eq!(normalized.name, "Anil Verma");
        assert_eq!(normalized.email, "parent@example.com");
        assert_eq!(normalized.phone, None);
        assert_eq!(normalized.message, "When does admission open?");
    }

    #[test]
    fn test_invalid_inquiry_is_rejected() {
        let mut bad = inquiry(None);
        bad.message = String::new();
        assert!(normalize_inquiry(bad).is_err());

        let mut bad = inquiry(None);
        bad.email = "nobody".to_string();
        assert!(normalize_inquiry(bad).is_err());
    }
}
