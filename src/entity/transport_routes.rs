//! 校车路线实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transport_routes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub route_name: String,
    pub vehicle_number: String,
    pub driver_name: Option<String>,
    pub stops: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_search_hit(self) -> SearchHit {
        SearchHit::new(
            SearchSource::TransportRoutes,
            self.id,
            self.route_name,
            Some(match self.driver_name {
                Some(driver) => format!("{} · {}", self.vehicle_number, driver),
                None => self.vehicle_number,
            }),
        )
    }
}
