use axum::Router;
use axum::routing::{get, post};
use jrclaw_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let deadline_routes = Router::new()
        .route(
            "/api/deadlines/compute",
            post(handlers::deadlines::compute_deadline_handler),
        )
        .route(
            "/api/deadlines/compute-calendar",
            post(handlers::deadlines::compute_calendar_deadline_handler),
        )
        .route(
            "/api/deadlines/business-day",
            get(handlers::deadlines::business_day_handler),
        )
        .route(
            "/api/deadlines/next-business-day",
            get(handlers::deadlines::next_business_day_handler),
        )
        .route(
            "/api/deadlines/remaining",
            get(handlers::deadlines::remaining_business_days_handler),
        )
        .route(
            "/api/holidays/{year}",
            get(handlers::deadlines::holidays_handler),
        );

    let access_routes = Router::new()
        .route(
            "/api/access/roles/{role}/permissions",
            get(handlers::access::role_permissions_handler),
        )
        .route(
            "/api/access/check",
            post(handlers::access::check_permissions_handler),
        )
        .route(
            "/api/access/role-at-least",
            post(handlers::access::role_at_least_handler),
        );

    let team_routes = Router::new()
        .route(
            "/api/team/permissions",
            get(handlers::team::team_permissions_handler),
        )
        .route(
            "/api/team/members/{target_member_id}/visibility",
            get(handlers::team::member_visibility_handler),
        )
        .route(
            "/api/team/managers/{manager_id}/subordinates/{subordinate_id}",
            get(handlers::team::manager_relation_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(deadline_routes)
        .merge(access_routes)
        .merge(team_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .with_state(app_state))
}
