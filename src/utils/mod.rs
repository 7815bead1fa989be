pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{SafeIDI64, SafeSessionId};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::{contains_pattern, escape_like_pattern};

/// 数据库中日期列的存储格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";
