// ============================================================================
// FieldOps Core - Geofence
// File: crates/fieldops-core/src/domain/geofence.rs
// Description: Great-circle distance and radius classification
// ============================================================================

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Latitude/longitude in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Haversine distance in meters
pub fn haversine_meters(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dphi = (to.lat - from.lat).to_radians();
    let dlambda = (to.lon - from.lon).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Rounds to centimetres for storage and display.
pub fn round_distance(meters: f64) -> f64 {
    (meters * 100.0).round() / 100.0
}

/// Circular boundary around a base location
#[derive(Debug, Clone, Copy)]
pub struct Geofence {
    center: GeoPoint,
    radius_meters: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeofenceReading {
    /// Rounded to 2 decimals
    pub distance_meters: f64,
    pub is_within_range: bool,
}

impl Geofence {
    pub fn new(center: GeoPoint, radius_meters: f64) -> Self {
        Self { center, radius_meters }
    }

    /// Classification uses the unrounded distance; the boundary is inclusive.
    pub fn evaluate(&self, point: GeoPoint) -> GeofenceReading {
        let distance = haversine_meters(point, self.center);
        GeofenceReading {
            distance_meters: round_distance(distance),
            is_within_range: distance <= self.radius_meters,
        }
    }
}
