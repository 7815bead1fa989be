use serde::Serialize;

use super::entities::Exam;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct ExamListResponse {
    pub items: Vec<Exam>,
    pub pagination: PaginationInfo,
}
