//! 联系表单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_inquiries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_inquiry(self) -> crate::models::contact::entities::ContactInquiry {
        use crate::models::contact::entities::ContactInquiry;
        use chrono::{DateTime, Utc};

        ContactInquiry {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
