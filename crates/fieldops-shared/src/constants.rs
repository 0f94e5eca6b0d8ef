//! Application-wide constants

pub const MIN_LIST_LIMIT: i64 = 1;
pub const MAX_LIST_LIMIT: i64 = 200;
pub const DEFAULT_TASK_LIMIT: i64 = 100;
pub const DEFAULT_REPORT_LIMIT: i64 = 50;
pub const DEFAULT_NOTIFICATION_LIMIT: i64 = 50;

pub const DEFAULT_CHECKIN_RADIUS_METERS: f64 = 200.0;

pub const CLAIM_CUSTOM_TENANT_ID: &str = "custom:tenant_id";
pub const CLAIM_TENANT_ID: &str = "tenant_id";

