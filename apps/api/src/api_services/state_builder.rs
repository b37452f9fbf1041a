use std::sync::Arc;

use jrclaw_application::{
    Clock, DeadlineService, HolidayProvider, TeamAccessService, TeamMemberRepository,
};
use jrclaw_infrastructure::{
    BrazilianHolidayProvider, CachingHolidayProvider, HolidayCalendarConfig,
    InMemoryTeamMemberRepository, PostgresTeamMemberRepository, SystemClock,
};
use sqlx::PgPool;
use tracing::warn;

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub fn build_app_state(pool: Option<PgPool>, config: &ApiConfig) -> AppState {
    let calendar_config = HolidayCalendarConfig {
        include_forensic_recess: config.include_forensic_recess,
        extra_dates: config.extra_holiday_dates.clone(),
    };
    let holiday_provider: Arc<dyn HolidayProvider> = Arc::new(CachingHolidayProvider::new(
        Arc::new(BrazilianHolidayProvider::new(calendar_config)),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let team_member_repository: Arc<dyn TeamMemberRepository> = match pool.as_ref() {
        Some(pool) => Arc::new(PostgresTeamMemberRepository::new(pool.clone())),
        None => {
            warn!("DATABASE_URL is not set; team hierarchy uses an empty in-memory store");
            Arc::new(InMemoryTeamMemberRepository::new())
        }
    };

    AppState {
        deadline_service: DeadlineService::new(holiday_provider, clock),
        team_access_service: TeamAccessService::new(team_member_repository),
        postgres_pool: pool,
    }
}
