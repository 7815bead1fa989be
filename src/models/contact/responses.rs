use serde::Serialize;

use super::entities::ContactInquiry;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub items: Vec<ContactInquiry>,
    pub pagination: PaginationInfo,
}
