//! 学费记录实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub fee_type: String,
    pub amount: f64,
    pub status: String,
    pub due_date: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_search_hit(self) -> SearchHit {
        SearchHit::new(
            SearchSource::FeeRecords,
            self.id,
            format!("{} fee", self.fee_type),
            Some(format!("₹{:.2} · {} · due {}", self.amount, self.status, self.due_date)),
        )
    }
}
