use super::{SeaOrmStorage, db_err};
use crate::entity::prelude::{Classes, Exams, Profiles, SupportTickets};
use crate::entity::{profiles, support_tickets};
use crate::errors::Result;
use crate::models::dashboard::entities::DashboardStats;
use crate::models::profiles::entities::{ApprovalStatus, Role};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    async fn count_approved_with_role(&self, role: Role) -> Result<u64> {
        Profiles::find()
            .filter(profiles::Column::Role.eq(role.to_string()))
            .filter(profiles::Column::ApprovalStatus.eq(ApprovalStatus::Approved.to_string()))
            .count(&self.db)
            .await
            .map_err(db_err("Failed to count profiles"))
    }

    pub async fn dashboard_stats_impl(&self) -> Result<DashboardStats> {
        let (admins, professors, students) = tokio::try_join!(
            self.count_approved_with_role(Role::Admin),
            self.count_approved_with_role(Role::Professor),
            self.count_approved_with_role(Role::Student),
        )?;

        let pending_approvals = self.count_pending_profiles_impl().await?;
        let classes = Classes::find()
            .count(&self.db)
            .await
            .map_err(db_err("Failed to count classes"))?;
        let exams = Exams::find()
            .count(&self.db)
            .await
            .map_err(db_err("Failed to count exams"))?;
        let open_support_tickets = SupportTickets::find()
            .filter(support_tickets::Column::Status.is_in(["open", "in_progress"]))
            .count(&self.db)
            .await
            .map_err(db_err("Failed to count support tickets"))?;

        Ok(DashboardStats {
            admins,
            professors,
            students,
            pending_approvals,
            classes,
            exams,
            open_support_tickets,
        })
    }
}
