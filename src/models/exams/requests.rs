use serde::Deserialize;

use crate::models::common::PaginationQuery;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExamRequest {
    pub title: String,
    pub subject: String,
    pub class_name: String,
    #[serde(default = "default_exam_type")]
    pub exam_type: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub max_marks: i32,
}

fn default_exam_type() -> String {
    "unit_test".to_string()
}

impl CreateExamRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Exam title is required");
        }
        if self.subject.trim().is_empty() {
            return Err("Subject is required");
        }
        if self.class_name.trim().is_empty() {
            return Err("Class is required");
        }
        if self.max_marks <= 0 {
            return Err("Maximum marks must be greater than zero");
        }
        if self.end_date < self.start_date {
            return Err("End date cannot be before start date");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ExamListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExamListQuery {
    pub page: u64,
    pub size: u64,
    pub class_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request() -> CreateExamRequest {
        CreateExamRequest {
            title: "Half Yearly".into(),
            subject: "Mathematics".into(),
            class_name: "10-A".into(),
            exam_type: default_exam_type(),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            max_marks: 80,
        }
    }

    #[test]
    fn test_valid_exam() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut req = request();
        req.end_date = NaiveDate::from_ymd_opt(2026, 9, 13).unwrap();
        assert_eq!(req.validate(), Err("End date cannot be before start date"));
    }

    #[test]
    fn test_non_positive_marks_are_rejected() {
        let mut req = request();
        req.max_marks = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_exam_type_defaults() {
        let req: CreateExamRequest = serde_json::from_str(
            r#"{"title":"UT-1","subject":"Science","class_name":"7-C",
                "start_date":"2026-07-01","end_date":"2026-07-02","max_marks":25}"#,
        )
        .unwrap();
        assert_eq!(req.exam_type, "unit_test");
    }
}
