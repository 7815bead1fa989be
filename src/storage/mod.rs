use std::sync::Arc;

use crate::models::{
    contact::{entities::ContactInquiry, requests::ContactRequest, responses::ContactListResponse},
    dashboard::entities::DashboardStats,
    exams::{
        entities::Exam,
        requests::{CreateExamRequest, ExamListQuery},
        responses::ExamListResponse,
    },
    profiles::{
        entities::{ApprovalStatus, Profile},
        requests::{CreateProfileRequest, ProfileListQuery, UpdateProfileRequest},
        responses::ProfileListResponse,
    },
    search::entities::{SearchHit, SearchScope, SearchSource},
    transfer_certificates::{
        entities::TransferCertificate,
        requests::{CertificateListQuery, IssueCertificateRequest},
        responses::CertificateListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户资料
    async fn create_profile(&self, profile: CreateProfileRequest) -> Result<Profile>;
    async fn get_profile_by_id(&self, id: i64) -> Result<Option<Profile>>;
    async fn get_profile_by_email(&self, email: &str) -> Result<Option<Profile>>;
    async fn list_profiles_with_pagination(
        &self,
        query: ProfileListQuery,
    ) -> Result<ProfileListResponse>;
    async fn update_profile(&self, id: i64, update: UpdateProfileRequest)
    -> Result<Option<Profile>>;
    async fn set_approval_status(&self, id: i64, status: ApprovalStatus)
    -> Result<Option<Profile>>;
    async fn delete_profile(&self, id: i64) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn count_profiles(&self) -> Result<u64>;

    /// 待审批
    async fn count_pending_profiles(&self) -> Result<u64>;
    async fn list_pending_profiles(&self, limit: u64) -> Result<Vec<Profile>>;

    /// 全局搜索：单个数据源，大小写无关的子串匹配，最新的在前
    async fn search_source(
        &self,
        source: SearchSource,
        needle: &str,
        scope: SearchScope,
        limit: u64,
    ) -> Result<Vec<SearchHit>>;

    /// 仪表盘
    async fn dashboard_stats(&self) -> Result<DashboardStats>;

    /// 考试
    async fn create_exam(&self, created_by: i64, exam: CreateExamRequest) -> Result<Exam>;
    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>>;
    async fn list_exams_with_pagination(&self, query: ExamListQuery) -> Result<ExamListResponse>;
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 转学证明
    async fn issue_certificate(
        &self,
        issued_by: i64,
        certificate_number: String,
        request: IssueCertificateRequest,
    ) -> Result<TransferCertificate>;
    async fn get_certificate_by_id(&self, id: i64) -> Result<Option<TransferCertificate>>;
    async fn list_certificates_with_pagination(
        &self,
        query: CertificateListQuery,
    ) -> Result<CertificateListResponse>;

    /// 联系表单
    async fn create_contact_inquiry(&self, inquiry: ContactRequest) -> Result<ContactInquiry>;
    async fn list_contact_inquiries(&self, page: u64, size: u64) -> Result<ContactListResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
