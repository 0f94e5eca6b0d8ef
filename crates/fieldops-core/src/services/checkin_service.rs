// ============================================================================
// FieldOps Core - Check-in Service
// File: crates/fieldops-core/src/services/checkin_service.rs
// ============================================================================
//! Check-in recording with geofence validation

use chrono::Utc;
use fieldops_shared::TenantId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::checkin::normalize_recorded_at;
use crate::domain::{
    require_employee_id, Checkin, CheckinInput, CheckinReceipt, CheckinRequest, CheckinType, Geofence,
};
use crate::error::DomainError;
use crate::repositories::CheckinRepository;

#[derive(Debug, Clone)]
pub struct CheckinService {
    radius_meters: f64,
}

impl CheckinService {
    pub fn new(radius_meters: f64) -> Self {
        Self { radius_meters }
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Validate the payload and resolve `recorded_at` without touching the store
    pub fn prepare(&self, input: CheckinInput) -> Result<CheckinRequest, DomainError> {
        input.validate()?;
        let recorded_at = normalize_recorded_at(input.recorded_at.as_deref(), Utc::now())?;
        Ok(CheckinRequest { input, recorded_at })
    }

    /// Record a start or end check-in.
    ///
    /// 1. Look up the employee's department base location
    /// 2. Measure distance to the base and classify against the radius
    /// 3. Insert exactly one row and return it as a receipt
    pub async fn record<R: CheckinRepository>(
        &self,
        repo: &mut R,
        tenant_id: &TenantId,
        checkin_type: CheckinType,
        request: CheckinRequest,
    ) -> Result<CheckinReceipt, DomainError> {
        let CheckinRequest { input, recorded_at } = request;

        let base = repo
            .find_base_location(tenant_id, &input.employee_id)
            .await?
            .ok_or_else(|| {
                warn!(
                    "No department base location for employee {} (tenant {})",
                    input.employee_id, tenant_id
                );
                DomainError::EmployeeOrDepartmentNotFound
            })?;

        let reading = Geofence::new(base.point(), self.radius_meters).evaluate(input.point());
        let checkin = Checkin::new(tenant_id.clone(), checkin_type, input, base, reading, recorded_at);

        repo.insert_checkin(&checkin).await?;

        info!(
            "Check-in {} ({}) for employee {}: {}m from base, within_range={}",
            checkin.checkin_id,
            checkin_type.as_str(),
            checkin.employee_id,
            checkin.distance_meters,
            checkin.is_within_range
        );

        Ok(CheckinReceipt::from(&checkin))
    }

    pub async fn latest<R: CheckinRepository>(
        &self,
        repo: &mut R,
        tenant_id: &TenantId,
        employee_id: &str,
    ) -> Result<Checkin, DomainError> {
        let employee_id = require_employee_id(employee_id)?;

        repo.latest_checkin(tenant_id, employee_id)
            .await?
            .ok_or(DomainError::CheckinNotFound)
    }
}
