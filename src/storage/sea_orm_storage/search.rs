//! 全局搜索的单表查询

use super::{SeaOrmStorage, contains_any, db_err};
use crate::entity::{
    announcements, assignments, classes, courses, departments, events, exams, fee_records,
    inventory_items, leave_applications, library_books, profiles, subjects, support_tickets,
    transport_routes,
};
use crate::errors::Result;
use crate::models::profiles::entities::ApprovalStatus;
use crate::models::search::entities::{SearchHit, SearchScope, SearchSource};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 在一张表的若干文本列上做子串匹配，附加过滤条件。
    /// 按 (created_at, id) 倒序，同一秒内创建的行顺序也固定
    async fn matching_rows<E>(
        &self,
        columns: &[E::Column],
        filter: Condition,
        newest_first: (E::Column, E::Column),
        needle: &str,
        limit: u64,
    ) -> Result<Vec<E::Model>>
    where
        E: EntityTrait,
    {
        let (created_at, id) = newest_first;
        E::find()
            .filter(contains_any(columns, needle))
            .filter(filter)
            .order_by_desc(created_at)
            .order_by_desc(id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err("Search query failed"))
    }

    pub async fn search_source_impl(
        &self,
        source: SearchSource,
        needle: &str,
        scope: SearchScope,
        limit: u64,
    ) -> Result<Vec<SearchHit>> {
        let owner = scope.scoped_owner(source);

        macro_rules! hits {
            ($module:ident, [$($col:ident),+ $(,)?]) => {
                hits!($module, [$($col),+], Condition::all())
            };
            ($module:ident, [$($col:ident),+ $(,)?], owner = $owner_col:ident) => {
                hits!(
                    $module,
                    [$($col),+],
                    match owner {
                        Some(id) => Condition::all().add($module::Column::$owner_col.eq(id)),
                        None => Condition::all(),
                    }
                )
            };
            ($module:ident, [$($col:ident),+], $filter:expr) => {
                self.matching_rows::<$module::Entity>(
                    &[$($module::Column::$col),+],
                    $filter,
                    ($module::Column::CreatedAt, $module::Column::Id),
                    needle,
                    limit,
                )
                .await?
                .into_iter()
                .map($module::Model::into_search_hit)
                .collect()
            };
        }

        let hits: Vec<SearchHit> = match source {
            SearchSource::Profiles => self.profile_hits(needle, scope, limit).await?,
            SearchSource::Classes => hits!(classes, [Name, Section, Room]),
            SearchSource::Subjects => hits!(subjects, [Name, Code, Department]),
            SearchSource::Exams => hits!(exams, [Title, Subject, ClassName, ExamType]),
            SearchSource::Assignments => {
                hits!(assignments, [Title, Description, Subject, ClassName])
            }
            SearchSource::Events => hits!(events, [Title, Description, Venue]),
            SearchSource::Announcements => hits!(announcements, [Title, Content, Audience]),
            SearchSource::Courses => hits!(courses, [Name, Code, Description]),
            SearchSource::Departments => hits!(departments, [Name, HeadName, Description]),
            SearchSource::TransportRoutes => {
                hits!(transport_routes, [RouteName, VehicleNumber, DriverName, Stops])
            }
            SearchSource::LeaveApplications => hits!(
                leave_applications,
                [LeaveType, Reason, Status],
                owner = ApplicantId
            ),
            SearchSource::SupportTickets => hits!(
                support_tickets,
                [Subject, Description, Status, Priority],
                owner = RequesterId
            ),
            SearchSource::LibraryBooks => hits!(library_books, [Title, Author, Isbn, Category]),
            SearchSource::FeeRecords => {
                hits!(fee_records, [FeeType, Status], owner = StudentId)
            }
            SearchSource::InventoryItems => {
                hits!(inventory_items, [Name, Category, Location])
            }
        };

        Ok(hits)
    }

    /// 管理员可见全部资料与邮箱；其他人只看到已审批的资料，且不按邮箱匹配
    async fn profile_hits(
        &self,
        needle: &str,
        scope: SearchScope,
        limit: u64,
    ) -> Result<Vec<SearchHit>> {
        use profiles::Column;

        let full_view = scope.sees_private_profiles();
        let (columns, filter) = if full_view {
            (
                vec![Column::FullName, Column::Email, Column::ClassName, Column::House],
                Condition::all(),
            )
        } else {
            (
                vec![Column::FullName, Column::ClassName, Column::House],
                Condition::all()
                    .add(Column::ApprovalStatus.eq(ApprovalStatus::Approved.to_string())),
            )
        };

        let rows = self
            .matching_rows::<profiles::Entity>(
                &columns,
                filter,
                (Column::CreatedAt, Column::Id),
                needle,
                limit,
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_search_hit(full_view))
            .collect())
    }
}
