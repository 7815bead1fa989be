//! 公告实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub content: String,
    pub audience: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_search_hit(self) -> SearchHit {
        SearchHit::new(
            SearchSource::Announcements,
            self.id,
            self.title,
            Some(format!("For {}", self.audience)),
        )
    }
}
