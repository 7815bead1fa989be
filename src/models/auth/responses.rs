use serde::Serialize;

use crate::models::dashboard::entities::DashboardVariant;
use crate::models::profiles::entities::Profile;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub profile: Profile,
    /// 未审批的用户为 None
    pub dashboard: Option<DashboardVariant>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct ProfileInfoResponse {
    pub profile: Profile,
    pub dashboard: Option<DashboardVariant>,
}
