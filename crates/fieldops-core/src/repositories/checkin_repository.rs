//! Check-in repository trait (port)

use async_trait::async_trait;
use fieldops_shared::TenantId;

use crate::domain::{BaseLocation, Checkin};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckinRepository: Send {
    /// Employee → department → base coordinates, all within the tenant.
    async fn find_base_location(
        &mut self,
        tenant_id: &TenantId,
        employee_id: &str,
    ) -> Result<Option<BaseLocation>, DomainError>;
    async fn insert_checkin(&mut self, checkin: &Checkin) -> Result<(), DomainError>;
    async fn latest_checkin(
        &mut self,
        tenant_id: &TenantId,
        employee_id: &str,
    ) -> Result<Option<Checkin>, DomainError>;
}
