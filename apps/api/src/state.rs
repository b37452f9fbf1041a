use jrclaw_application::{DeadlineService, TeamAccessService};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub deadline_service: DeadlineService,
    pub team_access_service: TeamAccessService,
    pub postgres_pool: Option<PgPool>,
}
