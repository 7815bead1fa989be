use serde::Serialize;

use super::entities::{DashboardStats, DashboardVariant, NavItem};
use crate::models::profiles::entities::Profile;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub variant: DashboardVariant,
    pub navigation: &'static [NavItem],
    pub stats: DashboardStats,
    pub profile: Profile,
}
