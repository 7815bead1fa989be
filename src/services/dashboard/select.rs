//! 角色到仪表盘的映射与侧边栏导航

use crate::models::dashboard::entities::{DashboardVariant, NavItem};
use crate::models::profiles::entities::{Role, SubRole};

/// 对所有 (role, sub_role) 组合都有定义，未识别的子角色落到该角色的默认仪表盘
pub fn select_dashboard(role: Role, sub_role: Option<SubRole>) -> DashboardVariant {
    match (role, sub_role) {
        (Role::Admin, Some(SubRole::Head)) => DashboardVariant::Head,
        (Role::Admin, Some(SubRole::Principal)) => DashboardVariant::Principal,
        (Role::Admin, Some(SubRole::Hod)) => DashboardVariant::Hod,
        (Role::Admin, _) => DashboardVariant::Admin,
        (Role::Professor, Some(SubRole::Coordinator)) => DashboardVariant::Coordinator,
        (Role::Professor, _) => DashboardVariant::Teacher,
        (Role::Student, _) => DashboardVariant::Student,
    }
}

const OVERVIEW: NavItem = NavItem::new("overview", "Overview", "/dashboard");
const USERS: NavItem = NavItem::new("users", "Users & Approvals", "/dashboard/users");
const CLASSES: NavItem = NavItem::new("classes", "Classes", "/dashboard/classes");
const SUBJECTS: NavItem = NavItem::new("subjects", "Subjects", "/dashboard/subjects");
const DEPARTMENTS: NavItem = NavItem::new("departments", "Departments", "/dashboard/departments");
const EXAMS: NavItem = NavItem::new("exams", "Exams", "/dashboard/exams");
const ASSIGNMENTS: NavItem = NavItem::new("assignments", "Assignments", "/dashboard/assignments");
const EVENTS: NavItem = NavItem::new("events", "Events", "/dashboard/events");
const ANNOUNCEMENTS: NavItem =
    NavItem::new("announcements", "Announcements", "/dashboard/announcements");
const FINANCE: NavItem = NavItem::new("finance", "Finance", "/dashboard/fee-records");
const TRANSPORT: NavItem = NavItem::new("transport", "Transport", "/dashboard/transport-routes");
const LIBRARY: NavItem = NavItem::new("library", "Library", "/dashboard/library-books");
const INVENTORY: NavItem = NavItem::new("inventory", "Inventory", "/dashboard/inventory-items");
const CERTIFICATES: NavItem = NavItem::new(
    "certificates",
    "Transfer Certificates",
    "/dashboard/transfer-certificates",
);
const INQUIRIES: NavItem = NavItem::new("inquiries", "Contact Inquiries", "/dashboard/inquiries");
const LEAVE: NavItem = NavItem::new("leave", "Leave", "/dashboard/leave-applications");
const SUPPORT: NavItem = NavItem::new("support", "Support", "/dashboard/support-tickets");
const MY_FEES: NavItem = NavItem::new("fees", "My Fees", "/dashboard/fee-records");

const HEAD_NAV: &[NavItem] = &[
    OVERVIEW, USERS, DEPARTMENTS, CLASSES, EXAMS, EVENTS, ANNOUNCEMENTS, FINANCE, TRANSPORT,
    INVENTORY, CERTIFICATES, INQUIRIES, SUPPORT,
];
const PRINCIPAL_NAV: &[NavItem] = &[
    OVERVIEW, USERS, CLASSES, SUBJECTS, EXAMS, EVENTS, ANNOUNCEMENTS, CERTIFICATES, LEAVE,
    SUPPORT,
];
const HOD_NAV: &[NavItem] = &[
    OVERVIEW, DEPARTMENTS, SUBJECTS, CLASSES, EXAMS, ASSIGNMENTS, LEAVE, SUPPORT,
];
const ADMIN_NAV: &[NavItem] = &[
    OVERVIEW, USERS, CLASSES, EXAMS, FINANCE, TRANSPORT, LIBRARY, INVENTORY, CERTIFICATES,
    INQUIRIES, SUPPORT,
];
const COORDINATOR_NAV: &[NavItem] = &[
    OVERVIEW, CLASSES, SUBJECTS, EXAMS, ASSIGNMENTS, EVENTS, ANNOUNCEMENTS, LEAVE, SUPPORT,
];
const TEACHER_NAV: &[NavItem] = &[
    OVERVIEW, CLASSES, EXAMS, ASSIGNMENTS, ANNOUNCEMENTS, LIBRARY, LEAVE, SUPPORT,
];
const STUDENT_NAV: &[NavItem] = &[
    OVERVIEW, EXAMS, ASSIGNMENTS, EVENTS, ANNOUNCEMENTS, LIBRARY, MY_FEES, LEAVE, SUPPORT,
];

pub fn navigation_for(variant: DashboardVariant) -> &'static [NavItem] {
    match variant {
        DashboardVariant::Head => HEAD_NAV,
        DashboardVariant::Principal => PRINCIPAL_NAV,
        DashboardVariant::Hod => HOD_NAV,
        DashboardVariant::Admin => ADMIN_NAV,
        DashboardVariant::Coordinator => COORDINATOR_NAV,
        DashboardVariant::Teacher => TEACHER_NAV,
        DashboardVariant::Student => STUDENT_NAV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUB_ROLES: [Option<SubRole>; 6] = [
        None,
        Some(SubRole::Head),
        Some(SubRole::Principal),
        Some(SubRole::Hod),
        Some(SubRole::Coordinator),
        Some(SubRole::Teacher),
    ];

    #[test]
    fn test_admin_sub_roles() {
        assert_eq!(
            select_dashboard(Role::Admin, Some(SubRole::Head)),
            DashboardVariant::Head
        );
        assert_eq!(
            select_dashboard(Role::Admin, Some(SubRole::Principal)),
            DashboardVariant::Principal
        );
        assert_eq!(
            select_dashboard(Role::Admin, Some(SubRole::Hod)),
            DashboardVariant::Hod
        );
        assert_eq!(select_dashboard(Role::Admin, None), DashboardVariant::Admin);
        assert_eq!(
            select_dashboard(Role::Admin, Some(SubRole::Teacher)),
            DashboardVariant::Admin
        );
    }

    #[test]
    fn test_professor_sub_roles() {
        assert_eq!(
            select_dashboard(Role::Professor, Some(SubRole::Coordinator)),
            DashboardVariant::Coordinator
        );
        assert_eq!(
            select_dashboard(Role::Professor, Some(SubRole::Teacher)),
            DashboardVariant::Teacher
        );
        assert_eq!(
            select_dashboard(Role::Professor, None),
            DashboardVariant::Teacher
        );
        // 教师不会得到管理员仪表盘
        assert_eq!(
            select_dashboard(Role::Professor, Some(SubRole::Head)),
            DashboardVariant::Teacher
        );
    }

    #[test]
    fn test_students_always_get_student_dashboard() {
        for sub_role in SUB_ROLES {
            assert_eq!(
                select_dashboard(Role::Student, sub_role),
                DashboardVariant::Student
            );
        }
    }

    #[test]
    fn test_every_variant_is_reachable() {
        let mut reached = std::collections::HashSet::new();
        for role in [Role::Admin, Role::Professor, Role::Student] {
            for sub_role in SUB_ROLES {
                reached.insert(select_dashboard(role, sub_role));
            }
        }
        assert_eq!(reached.len(), DashboardVariant::ALL.len());
    }

    #[test]
    fn test_navigation_starts_with_overview_and_has_unique_keys() {
        for variant in DashboardVariant::ALL {
            let nav = navigation_for(variant);
            assert_eq!(nav[0].key, "overview");
            let keys: std::collections::HashSet<_> = nav.iter().map(|n| n.key).collect();
            assert_eq!(keys.len(), nav.len());
        }
    }

    #[test]
    fn test_students_cannot_see_user_management() {
        assert!(
            !navigation_for(DashboardVariant::Student)
                .iter()
                .any(|n| n.key == "users" || n.key == "certificates")
        );
    }
}
