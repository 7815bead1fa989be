//! 待审批注册通知
//!
//! 注册与审批变更后重新统计待审批数量并推送给在线的管理员。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::notifications::responses::PendingApprovalsResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::websocket::{ConnectionManager, WsMessage};
use crate::storage::Storage;

/// 面板中展示的最近待审批数
pub const PENDING_PREVIEW_LIMIT: u64 = 10;

/// 统计并广播待审批数量，失败只记录日志
pub async fn publish_pending_count(storage: &Arc<dyn Storage>) {
    match storage.count_pending_profiles().await {
        Ok(count) => {
            let delivered = ConnectionManager::get().broadcast(WsMessage::PendingApprovals { count });
            debug!("Pending approvals ({}) pushed to {} connection(s)", count, delivered);
        }
        Err(e) => warn!("Failed to count pending approvals for broadcast: {}", e),
    }
}

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from(request),
        }
    }

    pub async fn pending_approvals(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;

        let result = async {
            let pending_count = storage.count_pending_profiles().await?;
            let items = storage.list_pending_profiles(PENDING_PREVIEW_LIMIT).await?;
            Ok::<_, crate::errors::PortalError>(PendingApprovalsResponse {
                pending_count,
                items,
            })
        }
        .await;

        match result {
            Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Pending approvals loaded",
            ))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load pending approvals: {e}"),
                )),
            ),
        }
    }
}
