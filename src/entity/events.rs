//! 校园活动实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub event_date: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_search_hit(self) -> SearchHit {
        SearchHit::new(
            SearchSource::Events,
            self.id,
            self.title,
            Some(match self.venue {
                Some(venue) => format!("{} · {}", self.event_date, venue),
                None => self.event_date,
            }),
        )
    }
}
