//! 预导入模块，方便使用

pub use super::announcements::Entity as Announcements;
pub use super::assignments::Entity as Assignments;
pub use super::classes::Entity as Classes;
pub use super::contact_inquiries::{
    ActiveModel as ContactInquiryActiveModel, Entity as ContactInquiries,
    Model as ContactInquiryModel,
};
pub use super::courses::Entity as Courses;
pub use super::departments::Entity as Departments;
pub use super::events::Entity as Events;
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::fee_records::Entity as FeeRecords;
pub use super::inventory_items::Entity as InventoryItems;
pub use super::leave_applications::Entity as LeaveApplications;
pub use super::library_books::Entity as LibraryBooks;
pub use super::profiles::{
    ActiveModel as ProfileActiveModel, Entity as Profiles, Model as ProfileModel,
};
pub use super::subjects::Entity as Subjects;
pub use super::support_tickets::Entity as SupportTickets;
pub use super::transfer_certificates::{
    ActiveModel as TransferCertificateActiveModel, Entity as TransferCertificates,
    Model as TransferCertificateModel,
};
pub use super::transport_routes::Entity as TransportRoutes;
