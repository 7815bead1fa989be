use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferCertificate {
    pub id: i64,
    pub certificate_number: String,
    pub student_id: i64,
    pub reason: String,
    pub leaving_date: chrono::NaiveDate,
    pub conduct: String,
    pub issued_by: i64,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

/// 生成证书编号：TC-{年份}-{8位随机}
pub fn generate_certificate_number(now: chrono::DateTime<chrono::Utc>) -> String {
    use chrono::Datelike;
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("TC-{}-{}", now.year(), suffix[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_certificate_number_format() {
        let now = chrono::Utc.with_ymd_and_hms(2026, 3, 31, 10, 0, 0).unwrap();
        let number = generate_certificate_number(now);
        assert!(number.starts_with("TC-2026-"));
        assert_eq!(number.len(), "TC-2026-".len() + 8);
        assert_ne!(number, generate_certificate_number(now));
    }
}
