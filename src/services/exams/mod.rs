pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exams::requests::{CreateExamRequest, ExamListParams};
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from(request),
        }
    }

    pub async fn create_exam(
        &self,
        request: &HttpRequest,
        exam: CreateExamRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, request, exam).await
    }

    pub async fn list_exams(
        &self,
        request: &HttpRequest,
        query: ExamListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_exams(self, request, query).await
    }

    pub async fn delete_exam(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, request, id).await
    }
}
