// ============================================================================
// FieldOps API - Router
// File: crates/fieldops-api/src/routes.rs
// ============================================================================

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use fieldops_core::repositories::PersistenceGateway;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{checkin, health, notifications, reports, tasks};
use crate::middleware::attach_claims;
use crate::state::AppState;

pub fn build_router<G: PersistenceGateway>(state: AppState<G>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/checkin/health", get(health::health_check));

    let tenant_routes = Router::new()
        .route("/checkin/start", post(checkin::checkin_start::<G>))
        .route("/checkin/end", post(checkin::checkin_end::<G>))
        .route("/checkin/latest", get(checkin::latest_checkin::<G>))
        .route(
            "/notifications",
            get(notifications::list_notifications::<G>)
                .post(notifications::create_notification::<G>),
        )
        .route(
            "/reports",
            get(reports::list_reports::<G>).post(reports::create_report::<G>),
        )
        .route(
            "/reports/{employee_id}/{report_date}",
            get(reports::get_report::<G>),
        )
        .route(
            "/tasks",
            get(tasks::list_tasks::<G>).post(tasks::create_task::<G>),
        )
        .route("/tasks/{task_id}", get(tasks::get_task::<G>))
        .route_layer(middleware::from_fn_with_state(
            state.claims.clone(),
            attach_claims,
        ));

    Router::new()
        .merge(public_routes)
        .merge(tenant_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
