//! Repository traits (ports)

pub mod task_repository;
pub mod report_repository;
pub mod notification_repository;
pub mod checkin_repository;
pub mod gateway;

pub use task_repository::TaskRepository;
pub use report_repository::ReportRepository;
pub use notification_repository::NotificationRepository;
pub use checkin_repository::CheckinRepository;
pub use gateway::{PersistenceGateway, Store};

#[cfg(test)]
pub use task_repository::MockTaskRepository;
#[cfg(test)]
pub use report_repository::MockReportRepository;
#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
#[cfg(test)]
pub use checkin_repository::MockCheckinRepository;
