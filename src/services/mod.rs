pub mod auth;
pub mod chat;
pub mod contact;
pub mod dashboard;
pub mod exams;
pub mod notifications;
pub mod profiles;
pub mod search;
pub mod system;
pub mod transfer_certificates;
pub mod websocket;

pub use auth::AuthService;
pub use chat::ChatService;
pub use contact::ContactService;
pub use dashboard::DashboardService;
pub use exams::ExamService;
pub use notifications::NotificationService;
pub use profiles::ProfileService;
pub use search::SearchService;
pub use system::SystemService;
pub use transfer_certificates::CertificateService;

use actix_web::{HttpRequest, Result as ActixResult, error::ErrorInternalServerError, web};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::storage::Storage;

/// 从 app_data 取出存储实例
pub(crate) fn storage_from(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| ErrorInternalServerError("Storage not found in app data"))
}

/// 从 app_data 取出缓存实例
pub(crate) fn cache_from(request: &HttpRequest) -> ActixResult<Arc<dyn ObjectCache>> {
    request
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| ErrorInternalServerError("Cache not found in app data"))
}
