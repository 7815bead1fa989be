use serde::Deserialize;

use crate::models::common::PaginationQuery;

#[derive(Debug, Clone, Deserialize)]
pub struct IssueCertificateRequest {
    pub student_id: i64,
    pub reason: String,
    pub leaving_date: chrono::NaiveDate,
    #[serde(default = "default_conduct")]
    pub conduct: String,
}

fn default_conduct() -> String {
    "Good".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CertificateListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct CertificateListQuery {
    pub page: u64,
    pub size: u64,
    pub student_id: Option<i64>,
}
