pub mod auth;

pub mod profiles;

pub mod dashboard;

pub mod search;

pub mod chat;

pub mod notifications;

pub mod exams;

pub mod transfer_certificates;

pub mod contact;

pub mod system;

pub use auth::configure_auth_routes;
pub use chat::configure_chat_routes;
pub use contact::configure_contact_routes;
pub use dashboard::configure_dashboard_routes;
pub use exams::configure_exam_routes;
pub use notifications::configure_notification_routes;
pub use profiles::configure_profile_routes;
pub use search::configure_search_routes;
pub use system::configure_system_routes;
pub use transfer_certificates::configure_certificate_routes;
