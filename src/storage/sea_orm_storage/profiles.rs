use super::{SeaOrmStorage, contains_any, db_err, pagination_info};
use crate::entity::profiles::{ActiveModel, Column, Entity as Profiles};
use crate::errors::{PortalError, Result};
use crate::models::profiles::{
    entities::{ApprovalStatus, Profile},
    requests::{CreateProfileRequest, ProfileListQuery, UpdateProfileRequest},
    responses::ProfileListResponse,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    pub async fn create_profile_impl(&self, req: CreateProfileRequest) -> Result<Profile> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            email: Set(req.email.to_lowercase()),
            password_hash: Set(req.password_hash),
            full_name: Set(req.full_name),
            role: Set(req.role.to_string()),
            sub_role: Set(req.sub_role.map(|s| s.to_string())),
            approval_status: Set(req.approval_status.to_string()),
            house: Set(None),
            duties: Set("[]".to_string()),
            phone: Set(req.phone),
            class_name: Set(req.class_name),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("Failed to create profile"))?;

        Ok(result.into_profile())
    }

    pub async fn get_profile_by_id_impl(&self, id: i64) -> Result<Option<Profile>> {
        let result = Profiles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("Failed to load profile"))?;

        Ok(result.map(|m| m.into_profile()))
    }

    /// 邮箱以小写存储
    pub async fn get_profile_by_email_impl(&self, email: &str) -> Result<Option<Profile>> {
        let result = Profiles::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&self.db)
            .await
            .map_err(db_err("Failed to load profile"))?;

        Ok(result.map(|m| m.into_profile()))
    }

    pub async fn list_profiles_with_pagination_impl(
        &self,
        query: ProfileListQuery,
    ) -> Result<ProfileListResponse> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = Profiles::find();

        if let Some(search) = query.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            select = select.filter(contains_any(
                &[Column::FullName, Column::Email, Column::ClassName],
                search,
            ));
        }

        if let Some(role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::ApprovalStatus.eq(status.to_string()));
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_err("Failed to count profiles"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_err("Failed to count profile pages"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_err("Failed to list profiles"))?;

        Ok(ProfileListResponse {
            items: rows.into_iter().map(|m| m.into_profile()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    /// 只更新请求中出现的字段；用户不存在时返回 `None`
    pub async fn update_profile_impl(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Profile>> {
        let Some(existing) = self.get_profile_by_id_impl(id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name.trim().to_string());
        }
        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }
        // 子角色始终与最终角色一致：不匹配的请求报错，换角色后不匹配的旧子角色被清除
        let role = update.role.unwrap_or(existing.role);
        match update.sub_role {
            Some(Some(sub_role)) if !role.accepts_sub_role(sub_role) => {
                return Err(PortalError::validation(format!(
                    "Sub-role '{sub_role}' is not valid for role '{role}'"
                )));
            }
            Some(sub_role) => {
                model.sub_role = Set(sub_role.map(|s| s.to_string()));
            }
            None => {
                if existing
                    .sub_role
                    .is_some_and(|current| !role.accepts_sub_role(current))
                {
                    model.sub_role = Set(None);
                }
            }
        }
        if let Some(house) = update.house {
            let house = house.trim();
            model.house = Set((!house.is_empty()).then(|| house.to_string()));
        }
        if let Some(duties) = update.duties {
            let duties: Vec<String> = duties
                .into_iter()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .collect();
            model.duties = Set(serde_json::to_string(&duties)?);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(class_name) = update.class_name {
            model.class_name = Set(Some(class_name));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_err("Failed to update profile"))?;

        self.get_profile_by_id_impl(id).await
    }

    pub async fn set_approval_status_impl(
        &self,
        id: i64,
        status: ApprovalStatus,
    ) -> Result<Option<Profile>> {
        let result = Profiles::update_many()
            .col_expr(Column::ApprovalStatus, Expr::value(status.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err("Failed to update approval status"))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.get_profile_by_id_impl(id).await
    }

    pub async fn delete_profile_impl(&self, id: i64) -> Result<bool> {
        let result = Profiles::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("Failed to delete profile"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let result = Profiles::update_many()
            .col_expr(Column::LastLogin, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err("Failed to update last login"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_profiles_impl(&self) -> Result<u64> {
        Profiles::find()
            .count(&self.db)
            .await
            .map_err(db_err("Failed to count profiles"))
    }

    pub async fn count_pending_profiles_impl(&self) -> Result<u64> {
        Profiles::find()
            .filter(Column::ApprovalStatus.eq(ApprovalStatus::Pending.to_string()))
            .count(&self.db)
            .await
            .map_err(db_err("Failed to count pending profiles"))
    }

    /// 最新注册的在前
    pub async fn list_pending_profiles_impl(&self, limit: u64) -> Result<Vec<Profile>> {
        let rows = Profiles::find()
            .filter(Column::ApprovalStatus.eq(ApprovalStatus::Pending.to_string()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err("Failed to list pending profiles"))?;

        Ok(rows.into_iter().map(|m| m.into_profile()).collect())
    }
}
