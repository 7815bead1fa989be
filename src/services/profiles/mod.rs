pub mod approval;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::profiles::requests::{ApprovalRequest, ProfileListParams, UpdateProfileRequest};
use crate::storage::Storage;

pub struct ProfileService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfileService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from(request),
        }
    }

    pub async fn list_profiles(
        &self,
        query: ProfileListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_profiles(self, query, request).await
    }

    pub async fn get_profile(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_profile(self, id, request).await
    }

    // 编辑角色、学院、职责等
    pub async fn update_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_profile(self, id, update, request).await
    }

    // 审批通过或拒绝注册
    pub async fn set_approval(
        &self,
        id: i64,
        approval: ApprovalRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approval::set_approval(self, id, approval, request).await
    }

    pub async fn delete_profile(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_profile(self, id, request).await
    }
}
