use serde::Serialize;

use crate::models::profiles::entities::Profile;

/// 待审批注册
#[derive(Debug, Serialize)]
pub struct PendingApprovalsResponse {
    pub pending_count: u64,
    pub items: Vec<Profile>,
}
