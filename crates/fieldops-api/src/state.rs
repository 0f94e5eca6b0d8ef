use std::sync::Arc;

use fieldops_core::repositories::PersistenceGateway;
use fieldops_core::services::{CheckinService, NotificationService, ReportService, TaskService};
use fieldops_security::{ClaimsDecoder, TenantConfig, TenantResolver};
use fieldops_shared::config::AppConfig;

/// Shared, read-only application state. Cloned into every request.
pub struct AppState<G> {
    pub gateway: Arc<G>,
    pub tenants: Arc<TenantResolver>,
    pub claims: Arc<ClaimsDecoder>,
    pub tasks: TaskService,
    pub reports: ReportService,
    pub notifications: NotificationService,
    pub checkins: CheckinService,
}

impl<G: PersistenceGateway> AppState<G> {
    pub fn new(
        gateway: G,
        tenants: TenantResolver,
        claims: ClaimsDecoder,
        checkin_radius_meters: f64,
    ) -> Self {
        Self {
            gateway: Arc::new(gateway),
            tenants: Arc::new(tenants),
            claims: Arc::new(claims),
            tasks: TaskService::new(),
            reports: ReportService::new(),
            notifications: NotificationService::new(),
            checkins: CheckinService::new(checkin_radius_meters),
        }
    }

    pub fn from_config(gateway: G, config: &AppConfig) -> Self {
        let tenants = TenantResolver::new(TenantConfig {
            fallback: config.auth.tenant_fallback.clone(),
        });
        let claims = ClaimsDecoder::new(config.auth.jwt_secret.as_deref());
        Self::new(gateway, tenants, claims, config.checkin.radius_meters)
    }
}

// Derive would demand `G: Clone`; only the Arc is cloned.
impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            tenants: Arc::clone(&self.tenants),
            claims: Arc::clone(&self.claims),
            tasks: self.tasks.clone(),
            reports: self.reports.clone(),
            notifications: self.notifications.clone(),
            checkins: self.checkins.clone(),
        }
    }
}
