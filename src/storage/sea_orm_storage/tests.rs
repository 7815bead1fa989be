use sea_orm::{ActiveModelTrait, Set};

use super::SeaOrmStorage;
use crate::entity::{classes, fee_records, leave_applications, support_tickets};
use crate::models::exams::requests::{CreateExamRequest, ExamListQuery};
use crate::models::profiles::entities::{ApprovalStatus, Role, SubRole};
use crate::models::profiles::requests::{
    CreateProfileRequest, ProfileListQuery, UpdateProfileRequest,
};
use crate::models::search::entities::{SearchScope, SearchSource};
use crate::models::transfer_certificates::requests::{
    CertificateListQuery, IssueCertificateRequest,
};
use crate::storage::Storage;

fn profile(email: &str, name: &str, role: Role, status: ApprovalStatus) -> CreateProfileRequest {
    CreateProfileRequest {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        full_name: name.to_string(),
        role,
        sub_role: None,
        approval_status: status,
        phone: None,
        class_name: None,
    }
}

async fn add_class(storage: &SeaOrmStorage, name: &str, created_at: i64) {
    classes::ActiveModel {
        name: Set(name.to_string()),
        section: Set(None),
        class_teacher_id: Set(None),
        room: Set(None),
        created_at: Set(created_at),
        ..Default::default()
    }
    .insert(&storage.db)
    .await
    .unwrap();
}

async fn add_leave(storage: &SeaOrmStorage, applicant_id: i64, reason: &str) {
    leave_applications::ActiveModel {
        applicant_id: Set(applicant_id),
        leave_type: Set("medical".to_string()),
        reason: Set(reason.to_string()),
        start_date: Set("2026-10-01".to_string()),
        end_date: Set("2026-10-03".to_string()),
        status: Set("pending".to_string()),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    }
    .insert(&storage.db)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_profile_lifecycle() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    let created = storage
        .create_profile(profile(
            "Riya@TheAaryans.in",
            "Riya Sharma",
            Role::Student,
            ApprovalStatus::Pending,
        ))
        .await
        .unwrap();
    assert_eq!(created.email, "riya@theaaryans.in");
    assert!(created.duties.is_empty());

    let found = storage
        .get_profile_by_email("RIYA@theaaryans.in")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, created.id);

    let updated = storage
        .update_profile(
            created.id,
            UpdateProfileRequest {
                house: Some("Tagore".to_string()),
                duties: Some(vec!["Prefect".to_string(), "  ".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.house.as_deref(), Some("Tagore"));
    assert_eq!(updated.duties, vec!["Prefect".to_string()]);
    assert_eq!(updated.full_name, "Riya Sharma");

    assert_eq!(storage.count_pending_profiles().await.unwrap(), 1);
    let approved = storage
        .set_approval_status(created.id, ApprovalStatus::Approved)
        .await
        .unwrap()
        .unwrap();
    assert!(approved.is_approved());
    assert_eq!(storage.count_pending_profiles().await.unwrap(), 0);

    assert!(storage.delete_profile(created.id).await.unwrap());
    assert!(storage.get_profile_by_id(created.id).await.unwrap().is_none());
    assert!(
        storage
            .update_profile(created.id, UpdateProfileRequest::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_profile_list_filters() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    for (email, name, role, status) in [
        ("a@x.in", "Anil Kumar", Role::Professor, ApprovalStatus::Approved),
        ("b@x.in", "Bela Singh", Role::Student, ApprovalStatus::Pending),
        ("c@x.in", "Chetan Rao", Role::Student, ApprovalStatus::Approved),
    ] {
        storage
            .create_profile(profile(email, name, role, status))
            .await
            .unwrap();
    }

    let students = storage
        .list_profiles_with_pagination(ProfileListQuery {
            page: 1,
            size: 10,
            role: Some(Role::Student),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(students.pagination.total, 2);

    let by_name = storage
        .list_profiles_with_pagination(ProfileListQuery {
            page: 1,
            size: 10,
            search: Some("KUMAR".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_name.items.len(), 1);
    assert_eq!(by_name.items[0].full_name, "Anil Kumar");
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_limited() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    for i in 0..12 {
        add_class(&storage, &format!("Grade {i}"), 1_700_000_000 + i).await;
    }
    add_class(&storage, "Robotics Club", 1_700_000_100).await;

    let scope = SearchScope::new(1, Role::Admin);
    let hits = storage
        .search_source(SearchSource::Classes, "grade", scope, 10)
        .await
        .unwrap();
    assert_eq!(hits.len(), 10);
    // 最新的在前
    assert_eq!(hits[0].title, "Grade 11");
    assert!(hits.iter().all(|h| h.source == SearchSource::Classes));

    let none = storage
        .search_source(SearchSource::Classes, "zzz", scope, 10)
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_search_escapes_like_wildcards() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    add_class(&storage, "Grade 10", 1).await;
    add_class(&storage, "100% Attendance", 2).await;

    let hits = storage
        .search_source(
            SearchSource::Classes,
            "0%",
            SearchScope::new(1, Role::Admin),
            10,
        )
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "100% Attendance");
}

#[tokio::test]
async fn test_personal_sources_are_owner_scoped() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    let owner = storage
        .create_profile(profile("o@x.in", "Owner", Role::Student, ApprovalStatus::Approved))
        .await
        .unwrap();
    let other = storage
        .create_profile(profile("p@x.in", "Other", Role::Student, ApprovalStatus::Approved))
        .await
        .unwrap();
    add_leave(&storage, owner.id, "fever").await;
    add_leave(&storage, other.id, "fever and cold").await;

    let own = storage
        .search_source(
            SearchSource::LeaveApplications,
            "fever",
            SearchScope::new(owner.id, Role::Student),
            10,
        )
        .await
        .unwrap();
    assert_eq!(own.len(), 1);

    let admin = storage
        .search_source(
            SearchSource::LeaveApplications,
            "fever",
            SearchScope::new(owner.id, Role::Admin),
            10,
        )
        .await
        .unwrap();
    assert_eq!(admin.len(), 2);
}

#[tokio::test]
async fn test_role_change_clears_mismatched_sub_role() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    let mut request = profile("vp@x.in", "Kavita Menon", Role::Admin, ApprovalStatus::Approved);
    request.sub_role = Some(SubRole::Principal);
    let principal = storage.create_profile(request).await.unwrap();

    let demoted = storage
        .update_profile(
            principal.id,
            UpdateProfileRequest {
                role: Some(Role::Student),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(demoted.role, Role::Student);
    assert_eq!(demoted.sub_role, None);

    // 不匹配的子角色直接拒绝
    let rejected = storage
        .update_profile(
            principal.id,
            UpdateProfileRequest {
                sub_role: Some(Some(SubRole::Teacher)),
                ..Default::default()
            },
        )
        .await;
    assert!(rejected.is_err());
}

#[tokio::test]
async fn test_sub_role_can_be_cleared_or_kept() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    let mut request = profile("co@x.in", "Sanjay Gupta", Role::Professor, ApprovalStatus::Approved);
    request.sub_role = Some(SubRole::Coordinator);
    let coordinator = storage.create_profile(request).await.unwrap();

    let kept = storage
        .update_profile(
            coordinator.id,
            UpdateProfileRequest {
                house: Some("Raman".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.sub_role, Some(SubRole::Coordinator));

    let cleared = storage
        .update_profile(
            coordinator.id,
            UpdateProfileRequest {
                sub_role: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.sub_role, None);
}

#[tokio::test]
async fn test_profile_search_hides_unapproved_and_email_from_non_admins() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    let student = storage
        .create_profile(profile("arjun@x.in", "Arjun Nair", Role::Student, ApprovalStatus::Approved))
        .await
        .unwrap();
    for (email, name, status) in [
        ("arjun.p@x.in", "Arjun Pillai", ApprovalStatus::Pending),
        ("arjun.r@x.in", "Arjun Reddy", ApprovalStatus::Rejected),
    ] {
        storage
            .create_profile(profile(email, name, Role::Student, status))
            .await
            .unwrap();
    }

    let as_student = storage
        .search_source(
            SearchSource::Profiles,
            "arjun",
            SearchScope::new(student.id, Role::Student),
            10,
        )
        .await
        .unwrap();
    assert_eq!(as_student.len(), 1);
    assert_eq!(as_student[0].title, "Arjun Nair");
    assert!(
        as_student
            .iter()
            .all(|hit| !hit.subtitle.as_deref().unwrap_or_default().contains('@'))
    );

    // 邮箱不参与非管理员的匹配
    let by_email = storage
        .search_source(
            SearchSource::Profiles,
            "x.in",
            SearchScope::new(student.id, Role::Student),
            10,
        )
        .await
        .unwrap();
    assert!(by_email.is_empty());

    let as_admin = storage
        .search_source(
            SearchSource::Profiles,
            "arjun",
            SearchScope::new(1, Role::Admin),
            10,
        )
        .await
        .unwrap();
    assert_eq!(as_admin.len(), 3);
    assert!(
        as_admin
            .iter()
            .all(|hit| hit.subtitle.as_deref().unwrap_or_default().contains("@x.in"))
    );
}

#[tokio::test]
async fn test_search_order_is_stable_within_one_second() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    for i in 0..12 {
        add_class(&storage, &format!("Section {i}"), 1_700_000_000).await;
    }

    let hits = storage
        .search_source(
            SearchSource::Classes,
            "section",
            SearchScope::new(1, Role::Admin),
            10,
        )
        .await
        .unwrap();
    let titles: Vec<&str> = hits.iter().map(|h| h.title.as_str()).collect();
    let expected: Vec<String> = (2..12).rev().map(|i| format!("Section {i}")).collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn test_dashboard_stats_counts() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    let student = storage
        .create_profile(profile("s@x.in", "S", Role::Student, ApprovalStatus::Approved))
        .await
        .unwrap();
    storage
        .create_profile(profile("t@x.in", "T", Role::Professor, ApprovalStatus::Pending))
        .await
        .unwrap();
    add_class(&storage, "Grade 9", 1).await;
    for status in ["open", "closed"] {
        support_tickets::ActiveModel {
            requester_id: Set(student.id),
            subject: Set("Projector".to_string()),
            description: Set("Broken".to_string()),
            status: Set(status.to_string()),
            priority: Set("high".to_string()),
            created_at: Set(1),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();
    }
    fee_records::ActiveModel {
        student_id: Set(student.id),
        fee_type: Set("tuition".to_string()),
        amount: Set(12500.0),
        status: Set("due".to_string()),
        due_date: Set("2026-11-01".to_string()),
        created_at: Set(1),
        ..Default::default()
    }
    .insert(&storage.db)
    .await
    .unwrap();

    let stats = storage.dashboard_stats().await.unwrap();
    assert_eq!(stats.students, 1);
    assert_eq!(stats.professors, 0);
    assert_eq!(stats.pending_approvals, 1);
    assert_eq!(stats.classes, 1);
    assert_eq!(stats.open_support_tickets, 1);
}

#[tokio::test]
async fn test_exam_and_certificate_records() {
    let storage = SeaOrmStorage::in_memory().await.unwrap();
    let admin = storage
        .create_profile(CreateProfileRequest {
            sub_role: Some(SubRole::Principal),
            ..profile("adm@x.in", "Admin", Role::Admin, ApprovalStatus::Approved)
        })
        .await
        .unwrap();
    let student = storage
        .create_profile(profile("stu@x.in", "Stu", Role::Student, ApprovalStatus::Approved))
        .await
        .unwrap();

    let date = |s: &str| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    let exam = storage
        .create_exam(
            admin.id,
            CreateExamRequest {
                title: "Half Yearly".to_string(),
                subject: "Physics".to_string(),
                class_name: "Grade 10".to_string(),
                exam_type: "term".to_string(),
                start_date: date("2026-09-20"),
                end_date: date("2026-09-21"),
                max_marks: 80,
            },
        )
        .await
        .unwrap();
    assert_eq!(exam.start_date, date("2026-09-20"));

    let listed = storage
        .list_exams_with_pagination(ExamListQuery {
            page: 1,
            size: 10,
            class_name: Some("Grade 10".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(listed.items.len(), 1);
    assert!(storage.delete_exam(exam.id).await.unwrap());
    assert!(!storage.delete_exam(exam.id).await.unwrap());

    let tc = storage
        .issue_certificate(
            admin.id,
            "TC-2026-ABCDEF12".to_string(),
            IssueCertificateRequest {
                student_id: student.id,
                reason: "Relocation".to_string(),
                leaving_date: date("2026-10-15"),
                conduct: "Good".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        storage
            .get_certificate_by_id(tc.id)
            .await
            .unwrap()
            .unwrap()
            .certificate_number,
        "TC-2026-ABCDEF12"
    );
    let for_student = storage
        .list_certificates_with_pagination(CertificateListQuery {
            page: 1,
            size: 10,
            student_id: Some(student.id),
        })
        .await
        .unwrap();
    assert_eq!(for_student.pagination.total, 1);
}
