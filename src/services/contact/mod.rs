pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::contact::requests::{ContactListParams, ContactRequest};
use crate::storage::Storage;

pub struct ContactService {
    storage: Option<Arc<dyn Storage>>,
}

impl ContactService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from(request),
        }
    }

    // 官网联系表单，公开接口
    pub async fn submit(
        &self,
        request: &HttpRequest,
        inquiry: ContactRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_inquiry(self, request, inquiry).await
    }

    pub async fn list(
        &self,
        request: &HttpRequest,
        query: ContactListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_inquiries(self, request, query).await
    }
}
