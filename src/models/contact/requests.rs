use serde::Deserialize;

use crate::models::common::PaginationQuery;

// 官网联系表单
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}
