//! 考试实体

use sea_orm::entity::prelude::*;

use crate::models::search::entities::{SearchHit, SearchSource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub class_name: String,
    pub exam_type: String,
    /// YYYY-MM-DD
    pub start_date: String,
    pub end_date: String,
    pub max_marks: i32,
    pub created_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_exam(self) -> crate::models::exams::entities::Exam {
        use crate::models::exams::entities::Exam;
        use chrono::{DateTime, NaiveDate, Utc};

        Exam {
            id: self.id,
            title: self.title,
            subject: self.subject,
            class_name: self.class_name,
            exam_type: self.exam_type,
            start_date: NaiveDate::parse_from_str(&self.start_date, crate::utils::DATE_FORMAT)
                .unwrap_or_default(),
            end_date: NaiveDate::parse_from_str(&self.end_date, crate::utils::DATE_FORMAT)
                .unwrap_or_default(),
            max_marks: self.max_marks,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }

    pub fn into_search_hit(self) -> SearchHit {
        SearchHit::new(
            SearchSource::Exams,
            self.id,
            self.title,
            Some(format!(
                "{} · {} · {}",
                self.subject, self.class_name, self.start_date
            )),
        )
    }
}
