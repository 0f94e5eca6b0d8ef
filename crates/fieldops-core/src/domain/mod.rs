//! # FieldOps Core - Domain Module
//! 
//! Domain entities for the FieldOps backend.

pub mod task;
pub mod report;
pub mod notification;
pub mod checkin;
pub mod employee;
pub mod geofence;

// Re-export all entities and enums
pub use task::{Task, TaskStatus, NewTask};
pub use report::{Report, NewReport};
pub use notification::{Notification, NewNotification, NotificationQuery};
pub use checkin::{BaseLocation, Checkin, CheckinInput, CheckinReceipt, CheckinRequest, CheckinType};
pub use employee::require_employee_id;
pub use geofence::{GeoPoint, Geofence, GeofenceReading};
