pub mod get;
pub mod issue;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::transfer_certificates::requests::{
    CertificateListParams, IssueCertificateRequest,
};
use crate::storage::Storage;

pub struct CertificateService {
    storage: Option<Arc<dyn Storage>>,
}

impl CertificateService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from(request),
        }
    }

    pub async fn issue_certificate(
        &self,
        request: &HttpRequest,
        certificate: IssueCertificateRequest,
    ) -> ActixResult<HttpResponse> {
        issue::issue_certificate(self, request, certificate).await
    }

    pub async fn list_certificates(
        &self,
        request: &HttpRequest,
        query: CertificateListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_certificates(self, request, query).await
    }

    pub async fn get_certificate(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_certificate(self, request, id).await
    }
}
