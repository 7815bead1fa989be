//! 数据模型
//!
//! 业务实体、请求与响应结构。与 `entity` 模块中的数据库实体分离。

pub mod auth;
pub mod chat;
pub mod common;
pub mod contact;
pub mod dashboard;
pub mod exams;
pub mod notifications;
pub mod profiles;
pub mod search;
pub mod system;
pub mod transfer_certificates;

pub use common::{ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
