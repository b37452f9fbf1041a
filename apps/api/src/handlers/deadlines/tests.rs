use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::NaiveDate;
use jrclaw_application::{Clock, DeadlineService, TeamAccessService};
use jrclaw_core::AppError;
use jrclaw_infrastructure::{BrazilianHolidayProvider, InMemoryTeamMemberRepository};

use super::{
    business_day_handler, compute_calendar_deadline_handler, compute_deadline_handler,
    holidays_handler, next_business_day_handler, remaining_business_days_handler,
};
use crate::dto::{
    BusinessDayQuery, ComputeCalendarDeadlineRequest, ComputeDeadlineRequest, HolidayQuery,
    RemainingBusinessDaysQuery,
};
use crate::error::ApiError;
use crate::state::AppState;

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn app_state() -> AppState {
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default();

    AppState {
        deadline_service: DeadlineService::new(
            Arc::new(BrazilianHolidayProvider::default()),
            Arc::new(FixedClock(today)),
        ),
        team_access_service: TeamAccessService::new(Arc::new(InMemoryTeamMemberRepository::new())),
        postgres_pool: None,
    }
}

async fn compute(
    start_date: &str,
    business_days: i64,
    state: Option<&str>,
) -> Result<String, ApiError> {
    let Json(response) = compute_deadline_handler(
        State(app_state()),
        Json(ComputeDeadlineRequest {
            start_date: start_date.to_owned(),
            business_days,
            state: state.map(str::to_owned),
        }),
    )
    .await?;

    Ok(response.deadline)
}

#[tokio::test]
async fn plain_week_deadline_skips_the_weekend() {
    let deadline = compute("2025-03-10", 5, None).await;
    assert_eq!(deadline.ok().as_deref(), Some("2025-03-17"));
}

#[tokio::test]
async fn easter_holidays_extend_the_deadline() {
    let deadline = compute("2025-04-16", 2, None).await;
    assert_eq!(deadline.ok().as_deref(), Some("2025-04-22"));
}

#[tokio::test]
async fn state_holiday_only_applies_when_state_is_given() {
    let national = compute("2025-07-08", 1, None).await;
    assert_eq!(national.ok().as_deref(), Some("2025-07-09"));

    let sao_paulo = compute("2025-07-08", 1, Some("sp")).await;
    assert_eq!(sao_paulo.ok().as_deref(), Some("2025-07-10"));
}

#[tokio::test]
async fn forensic_recess_suspends_counting_across_new_year() {
    let deadline = compute("2025-12-18", 2, None).await;
    assert_eq!(deadline.ok().as_deref(), Some("2026-01-21"));
}

#[tokio::test]
async fn invalid_inputs_are_rejected_as_validation_errors() {
    for result in [
        compute("2025-03-10", 0, None).await,
        compute("2025-03-10", -3, None).await,
        compute("2025-03-10", 2_000_000, None).await,
        compute("2025-03-10", i64::MAX, None).await,
        compute("2025-03-10", 5, Some("XX")).await,
        compute("10/03/2025", 5, None).await,
    ] {
        assert!(matches!(result, Err(ApiError(AppError::Validation(_)))));
    }
}

#[tokio::test]
async fn calendar_deadline_rolls_to_next_business_day() {
    let result = compute_calendar_deadline_handler(
        State(app_state()),
        Json(ComputeCalendarDeadlineRequest {
            start_date: "2025-04-11".to_owned(),
            days: 7,
            state: None,
        }),
    )
    .await;

    let deadline = result.map(|Json(response)| response.deadline);
    assert_eq!(deadline.ok().as_deref(), Some("2025-04-22"));
}

#[tokio::test]
async fn business_day_queries_classify_dates() {
    let saturday = business_day_handler(
        State(app_state()),
        Query(BusinessDayQuery {
            date: "2025-03-15".to_owned(),
            state: None,
        }),
    )
    .await;
    assert!(matches!(saturday, Ok(Json(response)) if !response.is_business_day));

    let next = next_business_day_handler(
        State(app_state()),
        Query(BusinessDayQuery {
            date: "2025-04-18".to_owned(),
            state: None,
        }),
    )
    .await;
    assert_eq!(
        next.map(|Json(response)| response.date).ok().as_deref(),
        Some("2025-04-22")
    );
}

#[tokio::test]
async fn remaining_days_report_urgency() {
    let result = remaining_business_days_handler(
        State(app_state()),
        Query(RemainingBusinessDaysQuery {
            target_date: "2025-03-12".to_owned(),
            state: None,
        }),
    )
    .await;

    let Ok(Json(response)) = result else {
        panic!("remaining business days request failed");
    };
    assert_eq!(response.business_days, 2);
    assert_eq!(response.urgency, "critical");

    let overdue = remaining_business_days_handler(
        State(app_state()),
        Query(RemainingBusinessDaysQuery {
            target_date: "2025-03-07".to_owned(),
            state: None,
        }),
    )
    .await;
    assert!(matches!(
        overdue,
        Ok(Json(response)) if response.business_days == -1 && response.urgency == "overdue"
    ));
}

#[tokio::test]
async fn holiday_listing_includes_state_dates() {
    let result = holidays_handler(
        State(app_state()),
        Path(2025),
        Query(HolidayQuery {
            state: Some("SP".to_owned()),
        }),
    )
    .await;

    let Ok(Json(response)) = result else {
        panic!("holiday listing failed");
    };
    assert_eq!(response.year, 2025);
    assert_eq!(response.state.as_deref(), Some("SP"));
    assert!(response.dates.iter().any(|date| date == "2025-07-09"));
    assert!(response.dates.iter().any(|date| date == "2025-04-18"));
}

#[tokio::test]
async fn holiday_listing_rejects_unsupported_years() {
    for year in [1583, 9000] {
        let result = holidays_handler(
            State(app_state()),
            Path(year),
            Query(HolidayQuery { state: None }),
        )
        .await;
        assert!(matches!(result, Err(ApiError(AppError::Validation(_)))));
    }
}

#[tokio::test]
async fn remaining_days_reject_distant_targets() {
    let result = remaining_business_days_handler(
        State(app_state()),
        Query(RemainingBusinessDaysQuery {
            target_date: "9000-01-01".to_owned(),
            state: None,
        }),
    )
    .await;

    assert!(matches!(result, Err(ApiError(AppError::Validation(_)))));
}
