use serde::{Deserialize, Serialize};

use crate::models::profiles::entities::Role;

/// 全局搜索的数据来源，声明顺序即结果拼接顺序
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SearchSource {
    Profiles,
    Classes,
    Subjects,
    Exams,
    Assignments,
    Events,
    Announcements,
    Courses,
    Departments,
    TransportRoutes,
    LeaveApplications,
    SupportTickets,
    LibraryBooks,
    FeeRecords,
    InventoryItems,
}

impl SearchSource {
    pub const ALL: [SearchSource; 15] = [
        SearchSource::Profiles,
        SearchSource::Classes,
        SearchSource::Subjects,
        SearchSource::Exams,
        SearchSource::Assignments,
        SearchSource::Events,
        SearchSource::Announcements,
        SearchSource::Courses,
        SearchSource::Departments,
        SearchSource::TransportRoutes,
        SearchSource::LeaveApplications,
        SearchSource::SupportTickets,
        SearchSource::LibraryBooks,
        SearchSource::FeeRecords,
        SearchSource::InventoryItems,
    ];

    /// 数据库表名
    pub fn table_name(&self) -> &'static str {
        match self {
            SearchSource::Profiles => "profiles",
            SearchSource::Classes => "classes",
            SearchSource::Subjects => "subjects",
            SearchSource::Exams => "exams",
            SearchSource::Assignments => "assignments",
            SearchSource::Events => "events",
            SearchSource::Announcements => "announcements",
            SearchSource::Courses => "courses",
            SearchSource::Departments => "departments",
            SearchSource::TransportRoutes => "transport_routes",
            SearchSource::LeaveApplications => "leave_applications",
            SearchSource::SupportTickets => "support_tickets",
            SearchSource::LibraryBooks => "library_books",
            SearchSource::FeeRecords => "fee_records",
            SearchSource::InventoryItems => "inventory_items",
        }
    }

    /// 属于个人数据的来源（按所有者过滤）
    pub fn is_personal(&self) -> bool {
        matches!(
            self,
            SearchSource::LeaveApplications | SearchSource::SupportTickets | SearchSource::FeeRecords
        )
    }

    /// 前端跳转路径
    pub fn link_for(&self, id: i64) -> String {
        format!("/dashboard/{}/{}", self.table_name().replace('_', "-"), id)
    }
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

/// 发起搜索的用户
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchScope {
    pub requester_id: i64,
    pub role: Role,
}

impl SearchScope {
    pub fn new(requester_id: i64, role: Role) -> Self {
        Self { requester_id, role }
    }

    /// 个人数据只对所有者可见，管理员不受限制
    pub fn scoped_owner(&self, source: SearchSource) -> Option<i64> {
        match self.role {
            Role::Admin => None,
            Role::Professor | Role::Student if source.is_personal() => Some(self.requester_id),
            _ => None,
        }
    }

    /// 待审批、已拒绝的资料与邮箱只对管理员可见
    pub fn sees_private_profiles(&self) -> bool {
        self.role == Role::Admin
    }
}

/// 单条搜索结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub source: SearchSource,
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub link: String,
}

impl SearchHit {
    pub fn new(source: SearchSource, id: i64, title: String, subtitle: Option<String>) -> Self {
        Self {
            source,
            id,
            title,
            subtitle,
            link: source.link_for(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_are_unique_and_ordered() {
        let tables: std::collections::HashSet<_> =
            SearchSource::ALL.iter().map(|s| s.table_name()).collect();
        assert_eq!(tables.len(), 15);
        assert_eq!(SearchSource::ALL[0], SearchSource::Profiles);
        assert_eq!(SearchSource::ALL[14], SearchSource::InventoryItems);
    }

    #[test]
    fn test_personal_sources_are_scoped_for_students_and_professors() {
        for role in [Role::Student, Role::Professor] {
            let scope = SearchScope::new(42, role);
            assert_eq!(scope.scoped_owner(SearchSource::LeaveApplications), Some(42));
            assert_eq!(scope.scoped_owner(SearchSource::SupportTickets), Some(42));
            assert_eq!(scope.scoped_owner(SearchSource::FeeRecords), Some(42));
            assert_eq!(scope.scoped_owner(SearchSource::Exams), None);
        }
    }

    #[test]
    fn test_admin_scope_is_unrestricted() {
        let scope = SearchScope::new(1, Role::Admin);
        for source in SearchSource::ALL {
            assert_eq!(scope.scoped_owner(source), None);
        }
    }

    #[test]
    fn test_link_uses_kebab_case_table() {
        let hit = SearchHit::new(SearchSource::TransportRoutes, 7, "Route 7".into(), None);
        assert_eq!(hit.link, "/dashboard/transport-routes/7");
    }
}
