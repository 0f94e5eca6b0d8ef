//! Domain services (business logic)

pub mod task_service;
pub mod report_service;
pub mod notification_service;
pub mod checkin_service;

pub use task_service::TaskService;
pub use report_service::ReportService;
pub use notification_service::NotificationService;
pub use checkin_service::CheckinService;
