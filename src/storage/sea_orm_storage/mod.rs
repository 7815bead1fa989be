//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod contact;
mod dashboard;
mod exams;
mod profiles;
mod search;
mod transfer_certificates;

#[cfg(test)]
mod tests;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{PortalError, Result};
use crate::models::PaginationInfo;
use migration::{Migrator, MigratorTrait};
use crate::utils::contains_pattern;
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition, ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置连接并运行迁移
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage ready, database: {}", db_url);

        Ok(Self { db })
    }

    /// 单连接内存 SQLite，带完整迁移
    #[cfg(test)]
    pub(crate) async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");
        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("foreign_keys", "ON");
        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory");
        }

        // 内存库只在单个连接内存在，连接不能被回收
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite connect failed: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("Database connect failed: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortalError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite path"
            )))
        }
    }
}

pub(crate) fn db_err(action: &str) -> impl Fn(sea_orm::DbErr) -> PortalError + '_ {
    move |e| PortalError::database_operation(format!("{action}: {e}"))
}

/// 任一列满足 `LOWER(col) LIKE '%needle%'`（needle 中的 `%` `_` 已转义）
pub(crate) fn contains_any<C: ColumnTrait>(columns: &[C], needle: &str) -> Condition {
    let pattern = contains_pattern(needle);
    columns.iter().fold(Condition::any(), |cond, col| {
        cond.add(
            Expr::expr(Func::lower(Expr::col(*col)))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
    })
}

/// SeaORM 分页结果转换为响应分页信息
pub(crate) fn pagination_info(page: u64, size: u64, total: u64, pages: u64) -> PaginationInfo {
    PaginationInfo {
        page: page as i64,
        page_size: size as i64,
        total: total as i64,
        total_pages: pages as i64,
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户资料
    async fn create_profile(&self, profile: CreateProfileRequest) -> Result<Profile> {
        self.create_profile_impl(profile).await
    }

    async fn get_profile_by_id(&self, id: i64) -> Result<Option<Profile>> {
        self.get_profile_by_id_impl(id).await
    }

    async fn get_profile_by_email(&self, email: &str) -> Result<Option<Profile>> {
        self.get_profile_by_email_impl(email).await
    }

    async fn list_profiles_with_pagination(
        &self,
        query: ProfileListQuery,
    ) -> Result<ProfileListResponse> {
        self.list_profiles_with_pagination_impl(query).await
    }

    async fn update_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Profile>> {
        self.update_profile_impl(id, update).await
    }

    async fn set_approval_status(
        &self,
        id: i64,
        status: ApprovalStatus,
    ) -> Result<Option<Profile>> {
        self.set_approval_status_impl(id, status).await
    }

    async fn delete_profile(&self, id: i64) -> Result<bool> {
        self.delete_profile_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_profiles(&self) -> Result<u64> {
        self.count_profiles_impl().await
    }

    async fn count_pending_profiles(&self) -> Result<u64> {
        self.count_pending_profiles_impl().await
    }

    async fn list_pending_profiles(&self, limit: u64) -> Result<Vec<Profile>> {
        self.list_pending_profiles_impl(limit).await
    }

    // 搜索
    async fn search_source(
        &self,
        source: SearchSource,
        needle: &str,
        scope: SearchScope,
        limit: u64,
    ) -> Result<Vec<SearchHit>> {
        self.search_source_impl(source, needle, scope, limit).await
    }

    // 仪表盘
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.dashboard_stats_impl().await
    }

    // 考试
    async fn create_exam(&self, created_by: i64, exam: CreateExamRequest) -> Result<Exam> {
        self.create_exam_impl(created_by, exam).await
    }

    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(id).await
    }

    async fn list_exams_with_pagination(&self, query: ExamListQuery) -> Result<ExamListResponse> {
        self.list_exams_with_pagination_impl(query).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    // 转学证明
    async fn issue_certificate(
        &self,
        issued_by: i64,
        certificate_number: String,
        request: IssueCertificateRequest,
    ) -> Result<TransferCertificate> {
        self.issue_certificate_impl(issued_by, certificate_number, request)
            .await
    }

    async fn get_certificate_by_id(&self, id: i64) -> Result<Option<TransferCertificate>> {
        self.get_certificate_by_id_impl(id).await
    }

    async fn list_certificates_with_pagination(
        &self,
        query: CertificateListQuery,
    ) -> Result<CertificateListResponse> {
        self.list_certificates_with_pagination_impl(query).await
    }

    // 联系表单
    async fn create_contact_inquiry(&self, inquiry: ContactRequest) -> Result<ContactInquiry> {
        self.create_contact_inquiry_impl(inquiry).await
    }

    async fn list_contact_inquiries(&self, page: u64, size: u64) -> Result<ContactListResponse> {
        self.list_contact_inquiries_impl(page, size).await
    }
}
