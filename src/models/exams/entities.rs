use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub class_name: String,
    pub exam_type: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub max_marks: i32,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
