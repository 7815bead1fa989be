//! 班级实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub section: Option<String>,
    pub class_teacher_id: Option<i64>,
    pub room: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_search_hit(self) -> SearchHit {
        let subtitle = self.room.map(|room| format!("Room {room}"));
        let title = match &self.section {
            Some(section) => format!("{} {}", self.name, section),
            None => self.name,
        };
        SearchHit::new(SearchSource::Classes, self.id, title, subtitle)
    }
}
