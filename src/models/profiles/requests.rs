use super::entities::{ApprovalStatus, Role, SubRole};
use crate::models::common::PaginationQuery;
use serde::{Deserialize, Deserializer};

// 注册请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub class_name: Option<String>,
}

// 创建用户资料（用于存储层，密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateProfileRequest {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub sub_role: Option<SubRole>,
    pub approval_status: ApprovalStatus,
    pub phone: Option<String>,
    pub class_name: Option<String>,
}

// 用户资料查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct ProfileListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<Role>,
    pub status: Option<ApprovalStatus>,
    pub search: Option<String>,
}

// 用户资料列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ProfileListQuery {
    pub page: u64,
    pub size: u64,
    pub role: Option<Role>,
    pub status: Option<ApprovalStatus>,
    pub search: Option<String>,
}

// 字段缺失为 None，显式 null 为 Some(None)
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// 管理员编辑用户：角色、学院、职责
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub role: Option<Role>,
    /// `"sub_role": null` 清除子角色
    #[serde(default, deserialize_with = "double_option")]
    pub sub_role: Option<Option<SubRole>>,
    pub house: Option<String>,
    pub duties: Option<Vec<String>>,
    pub phone: Option<String>,
    pub class_name: Option<String>,
}

// 审批请求
#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub status: ApprovalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_role_distinguishes_missing_and_null() {
        let missing: UpdateProfileRequest = serde_json::from_str(r#"{"house":"Tagore"}"#).unwrap();
        assert_eq!(missing.sub_role, None);

        let cleared: UpdateProfileRequest = serde_json::from_str(r#"{"sub_role":null}"#).unwrap();
        assert_eq!(cleared.sub_role, Some(None));

        let set: UpdateProfileRequest =
            serde_json::from_str(r#"{"sub_role":"coordinator"}"#).unwrap();
        assert_eq!(set.sub_role, Some(Some(SubRole::Coordinator)));
    }
}
