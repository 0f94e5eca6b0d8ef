// ============================================================================
// FieldOps Infrastructure - PostgreSQL Check-in Repository
// File: crates/fieldops-infrastructure/src/database/postgres/checkin_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use fieldops_core::domain::{BaseLocation, Checkin, CheckinType};
use fieldops_core::error::DomainError;
use fieldops_core::repositories::CheckinRepository;
use fieldops_shared::TenantId;

use super::db_error;
use crate::database::gateway::PgSession;

#[derive(Debug, FromRow)]
struct BaseLocationRow {
    pub department_id: String,
    pub base_latitude: f64,
    pub base_longitude: f64,
}

impl From<BaseLocationRow> for BaseLocation {
    fn from(row: BaseLocationRow) -> Self {
        BaseLocation {
            department_id: row.department_id,
            base_latitude: row.base_latitude,
            base_longitude: row.base_longitude,
        }
    }
}

#[derive(Debug, FromRow)]
struct CheckinRow {
    pub checkin_id: Uuid,
    pub tenant_id: String,
    pub employee_id: String,
    pub department_id: String,
    pub checkin_type: String,
    pub lat: f64,
    pub lon: f64,
    pub accuracy: Option<f64>,
    pub distance_meters: f64,
    pub is_within_range: bool,
    pub recorded_at: DateTime<Utc>,
}

impl TryFrom<CheckinRow> for Checkin {
    type Error = DomainError;

    fn try_from(row: CheckinRow) -> Result<Self, Self::Error> {
        let checkin_type = CheckinType::from_str(&row.checkin_type).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown checkin type in row: {}", row.checkin_type))
        })?;

        Ok(Checkin {
            checkin_id: row.checkin_id,
            tenant_id: TenantId::new(row.tenant_id),
            employee_id: row.employee_id,
            department_id: row.department_id,
            checkin_type,
            lat: row.lat,
            lon: row.lon,
            accuracy: row.accuracy,
            distance_meters: row.distance_meters,
            is_within_range: row.is_within_range,
            recorded_at: row.recorded_at,
        })
    }
}

#[async_trait]
impl CheckinRepository for PgSession {
    async fn find_base_location(
        &mut self,
        tenant_id: &TenantId,
        employee_id: &str,
    ) -> Result<Option<BaseLocation>, DomainError> {
        let row: Option<BaseLocationRow> = sqlx::query_as(
            r#"
            SELECT e.department_id, d.base_latitude, d.base_longitude
            FROM employees e
            JOIN departments d
              ON d.tenant_id = e.tenant_id
             AND d.department_id = e.department_id
            WHERE e.tenant_id = $1 AND e.employee_id = $2
            "#
        )
        .bind(tenant_id.as_str())
        .bind(employee_id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(db_error("resolving base location"))?;

        Ok(row.map(BaseLocation::from))
    }

    async fn insert_checkin(&mut self, checkin: &Checkin) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO checkins (
                tenant_id, checkin_id, employee_id, department_id, checkin_type,
                lat, lon, accuracy, distance_meters, is_within_range, recorded_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#
        )
        .bind(checkin.tenant_id.as_str())
        .bind(checkin.checkin_id)
        .bind(&checkin.employee_id)
        .bind(&checkin.department_id)
        .bind(checkin.checkin_type.as_str())
        .bind(checkin.lat)
        .bind(checkin.lon)
        .bind(checkin.accuracy)
        .bind(checkin.distance_meters)
        .bind(checkin.is_within_range)
        .bind(checkin.recorded_at)
        .execute(&mut *self.conn)
        .await
        .map_err(db_error("inserting checkin"))?;

        Ok(())
    }

    async fn latest_checkin(
        &mut self,
        tenant_id: &TenantId,
        employee_id: &str,
    ) -> Result<Option<Checkin>, DomainError> {
        let row: Option<CheckinRow> = sqlx::query_as(
            r#"
            SELECT
                checkin_id, tenant_id, employee_id, department_id, checkin_type,
                lat, lon, accuracy, distance_meters, is_within_range, recorded_at
            FROM checkins
            WHERE tenant_id = $1 AND employee_id = $2
            ORDER BY recorded_at DESC
            LIMIT 1
            "#
        )
        .bind(tenant_id.as_str())
        .bind(employee_id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(db_error("fetching latest checkin"))?;

        row.map(Checkin::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_checkin_row_maps_by_name() {
        let row = CheckinRow {
            checkin_id: Uuid::new_v4(),
            tenant_id: "acme".to_string(),
            employee_id: "E-1".to_string(),
            department_id: "D-1".to_string(),
            checkin_type: "end".to_string(),
            lat: -6.2,
            lon: 106.8,
            accuracy: None,
            distance_meters: 12.5,
            is_within_range: true,
            recorded_at: Utc.with_ymd_and_hms(2024, 5, 1, 17, 0, 0).unwrap(),
        };

        let checkin = Checkin::try_from(row).unwrap();
        assert_eq!(checkin.checkin_type, CheckinType::End);
        assert_eq!(checkin.department_id, "D-1");
        assert!(checkin.accuracy.is_none());
    }
}
