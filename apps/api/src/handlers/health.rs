use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use sqlx::PgPool;

use crate::dto::{HealthDependencyStatus, HealthResponse};
use crate::state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let postgres = check_postgres(state.postgres_pool.as_ref()).await;

    let ready = postgres.status != "error";
    let status = if ready { "ok" } else { "degraded" };
    let http_status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        http_status,
        Json(HealthResponse {
            status,
            ready,
            postgres,
        }),
    )
}

async fn check_postgres(pool: Option<&PgPool>) -> HealthDependencyStatus {
    let Some(pool) = pool else {
        return HealthDependencyStatus {
            status: "disabled",
            detail: None,
        };
    };

    let check = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await;

    match check {
        Ok(_) => HealthDependencyStatus {
            status: "ok",
            detail: None,
        },
        Err(error) => HealthDependencyStatus {
            status: "error",
            detail: Some(format!("postgres check failed: {error}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::State;
    use axum::http::StatusCode;
    use jrclaw_application::{DeadlineService, TeamAccessService};
    use jrclaw_infrastructure::{
        BrazilianHolidayProvider, InMemoryTeamMemberRepository, SystemClock,
    };

    use super::health_handler;
    use crate::state::AppState;

    #[tokio::test]
    async fn missing_database_is_reported_as_disabled() {
        let state = AppState {
            deadline_service: DeadlineService::new(
                Arc::new(BrazilianHolidayProvider::default()),
                Arc::new(SystemClock),
            ),
            team_access_service: TeamAccessService::new(Arc::new(
                InMemoryTeamMemberRepository::new(),
            )),
            postgres_pool: None,
        };

        let (status, payload) = health_handler(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(payload.ready);
        assert_eq!(payload.postgres.status, "disabled");
    }
}
