//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod announcements;
pub mod assignments;
pub mod classes;
pub mod contact_inquiries;
pub mod courses;
pub mod departments;
pub mod events;
pub mod exams;
pub mod fee_records;
pub mod inventory_items;
pub mod leave_applications;
pub mod library_books;
pub mod profiles;
pub mod subjects;
pub mod support_tickets;
pub mod transfer_certificates;
pub mod transport_routes;
