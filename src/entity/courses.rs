//! 课程实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_search_hit(self) -> SearchHit {
        SearchHit::new(
            SearchSource::Courses,
            self.id,
            self.name,
            Some(self.code),
        )
    }
}
