pub mod aggregate;

pub use aggregate::aggregate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::search::{
    entities::{SearchScope, SearchSource},
    requests::SearchParams,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct SearchService {
    storage: Option<Arc<dyn Storage>>,
}

impl SearchService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from(request),
        }
    }

    /// 全局搜索：15 个数据源并发查询后合并
    pub async fn search(
        &self,
        request: &HttpRequest,
        params: SearchParams,
    ) -> ActixResult<HttpResponse> {
        let Some(profile) = RequireJWT::extract_profile(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        };

        let storage = self.get_storage(request)?;
        let limits = AppConfig::get().search;
        let scope = SearchScope::new(profile.id, profile.role);

        let result = aggregate(&params.q, &SearchSource::ALL, limits, |source, needle| {
            let storage = storage.clone();
            async move {
                storage
                    .search_source(source, &needle, scope, limits.per_source_limit)
                    .await
            }
        })
        .await;

        Ok(HttpResponse::Ok().json(ApiResponse::success(result, "Search completed")))
    }
}
