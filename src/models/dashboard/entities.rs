use serde::{Deserialize, Serialize};

/// 仪表盘类型，由 (role, sub_role) 决定
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    Head,
    Principal,
    Hod,
    Admin,
    Coordinator,
    Teacher,
    Student,
}

impl DashboardVariant {
    pub const ALL: [DashboardVariant; 7] = [
        DashboardVariant::Head,
        DashboardVariant::Principal,
        DashboardVariant::Hod,
        DashboardVariant::Admin,
        DashboardVariant::Coordinator,
        DashboardVariant::Teacher,
        DashboardVariant::Student,
    ];
}

/// 侧边栏导航项
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

impl NavItem {
    pub const fn new(key: &'static str, label: &'static str, path: &'static str) -> Self {
        Self { key, label, path }
    }
}

/// 仪表盘统计
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub admins: u64,
    pub professors: u64,
    pub students: u64,
    pub pending_approvals: u64,
    pub classes: u64,
    pub exams: u64,
    pub open_support_tickets: u64,
}
