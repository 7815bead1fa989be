//! 转学证明实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transfer_certificates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub certificate_number: String,
    pub student_id: i64,
    pub reason: String,
    pub leaving_date: String,
    pub conduct: String,
    pub issued_by: i64,
    pub issued_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_certificate(
        self,
    ) -> crate::models::transfer_certificates::entities::TransferCertificate {
        use crate::models::transfer_certificates::entities::TransferCertificate;
        use chrono::{DateTime, NaiveDate, Utc};

        TransferCertificate {
            id: self.id,
            certificate_number: self.certificate_number,
            student_id: self.student_id,
            reason: self.reason,
            leaving_date: NaiveDate::parse_from_str(&self.leaving_date, crate::utils::DATE_FORMAT)
                .unwrap_or_default(),
            conduct: self.conduct,
            issued_by: self.issued_by,
            issued_at: DateTime::<Utc>::from_timestamp(self.issued_at, 0).unwrap_or_default(),
        }
    }
}
