use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub system_name: String,
    pub version: &'static str,
    pub uptime_seconds: i64,
}
