use serde::Serialize;

use super::entities::Profile;
use crate::models::common::PaginationInfo;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct ProfileListResponse {
    pub items: Vec<Profile>,
    pub pagination: PaginationInfo,
}
