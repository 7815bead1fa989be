//! 作业实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: String,
    pub class_name: String,
    pub due_date: String,
    pub created_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_search_hit(self) -> SearchHit {
        SearchHit::new(
            SearchSource::Assignments,
            self.id,
            self.title,
            Some(format!("{} · {} · due {}", self.subject, self.class_name, self.due_date)),
        )
    }
}
