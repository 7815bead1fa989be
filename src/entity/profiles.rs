//! 用户资料实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
    pub sub_role: Option<String>,
    pub approval_status: String,
    pub house: Option<String>,
    /// JSON 数组
    pub duties: String,
    pub phone: Option<String>,
    pub class_name: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_profile(self) -> crate::models::profiles::entities::Profile {
        use crate::models::profiles::entities::{ApprovalStatus, Profile, Role, SubRole};
        use chrono::{DateTime, Utc};

        Profile {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            role: self.role.parse::<Role>().unwrap_or(Role::Student),
            sub_role: self
                .sub_role
                .and_then(|s| s.parse::<SubRole>().ok()),
            approval_status: self
                .approval_status
                .parse::<ApprovalStatus>()
                .unwrap_or(ApprovalStatus::Pending),
            house: self.house,
            duties: serde_json::from_str(&self.duties).unwrap_or_default(),
            phone: self.phone,
            class_name: self.class_name,
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }

    /// `with_email` 只在管理员搜索时为 true
    pub fn into_search_hit(self, with_email: bool) -> SearchHit {
        let mut parts = vec![self.role];
        parts.extend(self.class_name);
        if with_email {
            parts.push(self.email);
        }
        let subtitle = parts.join(" · ");
        SearchHit::new(
            SearchSource::Profiles,
            self.id,
            self.full_name,
            Some(subtitle),
        )
    }
}
