//! 院系实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub head_name: Option<String>,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_search_hit(self) -> SearchHit {
        SearchHit::new(
            SearchSource::Departments,
            self.id,
            self.name,
            self.head_name.map(|head| format!("Head: {head}")),
        )
    }
}
