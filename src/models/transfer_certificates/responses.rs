use serde::Serialize;

use super::entities::TransferCertificate;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct CertificateListResponse {
    pub items: Vec<TransferCertificate>,
    pub pagination: PaginationInfo,
}
