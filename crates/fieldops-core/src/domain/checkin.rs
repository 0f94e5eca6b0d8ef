// ============================================================================
// FieldOps Core - Check-in Entity
// File: crates/fieldops-core/src/domain/checkin.rs
// Description: Geolocated start/end events validated against a base location
// ============================================================================

use chrono::{DateTime, NaiveDateTime, Utc};
use fieldops_shared::TenantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::geofence::{GeoPoint, GeofenceReading};
use crate::error::DomainError;

/// Check-in type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckinType {
    Start,
    End,
}

impl CheckinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckinType::Start => "start",
            CheckinType::End => "end",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(CheckinType::Start),
            "end" => Some(CheckinType::End),
            _ => None,
        }
    }
}

/// Department an employee belongs to, with its geofence center
#[derive(Debug, Clone, PartialEq)]
pub struct BaseLocation {
    pub department_id: String,
    pub base_latitude: f64,
    pub base_longitude: f64,
}

impl BaseLocation {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.base_latitude, self.base_longitude)
    }
}

/// Client-submitted check-in
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckinInput {
    #[validate(length(min = 1, max = 255, message = "employee_id must be between 1 and 255 characters"))]
    pub employee_id: String,

    #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "lon must be between -180 and 180"))]
    pub lon: f64,

    #[validate(range(min = 0.0, message = "accuracy must not be negative"))]
    pub accuracy: Option<f64>,

    /// RFC 3339, or a bare date-time which is read as UTC
    pub recorded_at: Option<String>,
}

impl CheckinInput {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Persisted check-in row
#[derive(Debug, Clone, Serialize)]
pub struct Checkin {
    pub checkin_id: Uuid,
    #[serde(skip)]
    pub tenant_id: TenantId,
    #[serde(skip)]
    pub employee_id: String,
    pub department_id: String,
    pub checkin_type: CheckinType,
    pub lat: f64,
    pub lon: f64,
    pub accuracy: Option<f64>,
    pub distance_meters: f64,
    pub is_within_range: bool,
    pub recorded_at: DateTime<Utc>,
}

impl Checkin {
    pub fn new(
        tenant_id: TenantId,
        checkin_type: CheckinType,
        input: CheckinInput,
        base: BaseLocation,
        reading: GeofenceReading,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            checkin_id: Uuid::new_v4(),
            tenant_id,
            employee_id: input.employee_id,
            department_id: base.department_id,
            checkin_type,
            lat: input.lat,
            lon: input.lon,
            accuracy: input.accuracy,
            distance_meters: reading.distance_meters,
            is_within_range: reading.is_within_range,
            recorded_at,
        }
    }
}

/// Check-in input that passed validation, with `recorded_at` resolved
#[derive(Debug, Clone)]
pub struct CheckinRequest {
    pub input: CheckinInput,
    pub recorded_at: DateTime<Utc>,
}

/// What the caller gets back after a successful check-in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckinReceipt {
    pub checkin_id: Uuid,
    pub department_id: String,
    pub distance_meters: f64,
    pub is_within_range: bool,
    pub recorded_at: DateTime<Utc>,
}

impl From<&Checkin> for CheckinReceipt {
    fn from(checkin: &Checkin) -> Self {
        Self {
            checkin_id: checkin.checkin_id,
            department_id: checkin.department_id.clone(),
            distance_meters: checkin.distance_meters,
            is_within_range: checkin.is_within_range,
            recorded_at: checkin.recorded_at,
        }
    }
}

/// Resolves the recorded time: absent means `now`, an offset is converted to
/// UTC, and a bare date-time is taken to already be UTC.
pub fn normalize_recorded_at(
    raw: Option<&str>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, DomainError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(now);
    };

    let candidate = raw.replacen(' ', "T", 1);

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(&candidate) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    candidate
        .parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|_| DomainError::InvalidTimestamp(raw.to_string()))
}
