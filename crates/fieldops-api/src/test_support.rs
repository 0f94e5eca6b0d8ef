//! In-memory persistence gateway for router tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use fieldops_core::repositories::{
    CheckinRepository, NotificationRepository, PersistenceGateway, ReportRepository,
    TaskRepository,
};
use fieldops_core::{BaseLocation, Checkin, DomainError, Notification, NotificationQuery, Report, Task};
use fieldops_shared::{ListLimit, TenantId};
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryData {
    pub tasks: Vec<Task>,
    pub reports: Vec<Report>,
    pub notifications: Vec<Notification>,
    pub checkins: Vec<Checkin>,
    pub bases: HashMap<(String, String), BaseLocation>,
    pub last_limit: Option<i64>,
}

#[derive(Clone, Default)]
pub struct MemoryGateway {
    data: Arc<Mutex<MemoryData>>,
    open_sessions: Arc<AtomicUsize>,
}

impl MemoryGateway {
    pub fn data(&self) -> MutexGuard<'_, MemoryData> {
        self.data.lock().unwrap()
    }

    pub fn open_sessions(&self) -> usize {
        self.open_sessions.load(Ordering::SeqCst)
    }

    pub fn add_base(&self, tenant: &str, employee_id: &str, base: BaseLocation) {
        self.data()
            .bases
            .insert((tenant.to_string(), employee_id.to_string()), base);
    }
}

pub struct MemorySession {
    data: Arc<Mutex<MemoryData>>,
    open_sessions: Arc<AtomicUsize>,
}

impl MemorySession {
    fn data(&self) -> MutexGuard<'_, MemoryData> {
        self.data.lock().unwrap()
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        self.open_sessions.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    type Session = MemorySession;

    async fn open(&self) -> Result<MemorySession, DomainError> {
        self.open_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(MemorySession {
            data: Arc::clone(&self.data),
            open_sessions: Arc::clone(&self.open_sessions),
        })
    }
}

#[async_trait]
impl TaskRepository for MemorySession {
    async fn insert_task(&mut self, task: &Task) -> Result<(), DomainError> {
        self.data().tasks.push(task.clone());
        Ok(())
    }

    async fn list_tasks(&mut self, tenant_id: &TenantId, limit: ListLimit) -> Result<Vec<Task>, DomainError> {
        let mut data = self.data();
        data.last_limit = Some(limit.get());
        let mut tasks: Vec<Task> = data
            .tasks
            .iter()
            .filter(|t| &t.tenant_id == tenant_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.due_date);
        tasks.truncate(limit.get() as usize);
        Ok(tasks)
    }

    async fn find_task(&mut self, tenant_id: &TenantId, task_id: &Uuid) -> Result<Option<Task>, DomainError> {
        Ok(self
            .data()
            .tasks
            .iter()
            .find(|t| &t.tenant_id == tenant_id && &t.task_id == task_id)
            .cloned())
    }
}

#[async_trait]
impl ReportRepository for MemorySession {
    async fn insert_report(&mut self, report: &Report) -> Result<(), DomainError> {
        self.data().reports.push(report.clone());
        Ok(())
    }

    async fn list_reports(&mut self, tenant_id: &TenantId, limit: ListLimit) -> Result<Vec<Report>, DomainError> {
        let mut data = self.data();
        data.last_limit = Some(limit.get());
        let mut reports: Vec<Report> = data
            .reports
            .iter()
            .filter(|r| &r.tenant_id == tenant_id)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.report_date.cmp(&a.report_date));
        reports.truncate(limit.get() as usize);
        Ok(reports)
    }

    async fn find_report(
        &mut self,
        tenant_id: &TenantId,
        employee_id: &str,
        report_date: NaiveDate,
    ) -> Result<Option<Report>, DomainError> {
        Ok(self
            .data()
            .reports
            .iter()
            .find(|r| {
                &r.tenant_id == tenant_id
                    && r.employee_id == employee_id
                    && r.report_date == report_date
            })
            .cloned())
    }
}

#[async_trait]
impl NotificationRepository for MemorySession {
    async fn insert_notification(&mut self, notification: &Notification) -> Result<(), DomainError> {
        self.data().notifications.push(notification.clone());
        Ok(())
    }

    async fn list_notifications(
        &mut self,
        tenant_id: &TenantId,
        query: &NotificationQuery,
    ) -> Result<Vec<Notification>, DomainError> {
        let mut data = self.data();
        data.last_limit = Some(query.limit.get());
        let mut items: Vec<Notification> = data
            .notifications
            .iter()
            .filter(|n| &n.tenant_id == tenant_id && n.employee_id == query.employee_id)
            .filter(|n| !query.unread_only || !n.is_read)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        items.truncate(query.limit.get() as usize);
        Ok(items)
    }
}

#[async_trait]
impl CheckinRepository for MemorySession {
    async fn find_base_location(
        &mut self,
        tenant_id: &TenantId,
        employee_id: &str,
    ) -> Result<Option<BaseLocation>, DomainError> {
        Ok(self
            .data()
            .bases
            .get(&(tenant_id.as_str().to_string(), employee_id.to_string()))
            .cloned())
    }

    async fn insert_checkin(&mut self, checkin: &Checkin) -> Result<(), DomainError> {
        self.data().checkins.push(checkin.clone());
        Ok(())
    }

    async fn latest_checkin(
        &mut self,
        tenant_id: &TenantId,
        employee_id: &str,
    ) -> Result<Option<Checkin>, DomainError> {
        Ok(self
            .data()
            .checkins
            .iter()
            .filter(|c| &c.tenant_id == tenant_id && c.employee_id == employee_id)
            .max_by_key(|c| c.recorded_at)
            .cloned())
    }
}

/// Gateway whose pool never hands out a connection
#[derive(Clone, Default)]
pub struct UnavailableGateway;

#[async_trait]
impl PersistenceGateway for UnavailableGateway {
    type Session = MemorySession;

    async fn open(&self) -> Result<MemorySession, DomainError> {
        Err(DomainError::DatabaseError("pool timed out".to_string()))
    }
}
