use axum::Json;
use axum::extract::{Path, Query, State};
use jrclaw_domain::DayCount;

use crate::dto::{
    BusinessDayQuery, BusinessDayResponse, ComputeCalendarDeadlineRequest,
    ComputeDeadlineRequest, DeadlineResponse, HolidayCalendarResponse, HolidayQuery,
    NextBusinessDayResponse, RemainingBusinessDaysQuery, RemainingBusinessDaysResponse,
    parse_iso_date, parse_state,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn compute_deadline_handler(
    State(state): State<AppState>,
    Json(payload): Json<ComputeDeadlineRequest>,
) -> ApiResult<Json<DeadlineResponse>> {
    let start_date = parse_iso_date("start_date", payload.start_date.as_str())?;
    let business_days = DayCount::new(payload.business_days)?;
    let state_code = parse_state(payload.state.as_deref())?;

    let deadline = state
        .deadline_service
        .compute_deadline(start_date, business_days, state_code)
        .await?;

    Ok(Json(DeadlineResponse {
        deadline: deadline.to_string(),
    }))
}

pub async fn compute_calendar_deadline_handler(
    State(state): State<AppState>,
    Json(payload): Json<ComputeCalendarDeadlineRequest>,
) -> ApiResult<Json<DeadlineResponse>> {
    let start_date = parse_iso_date("start_date", payload.start_date.as_str())?;
    let days = DayCount::new(payload.days)?;
    let state_code = parse_state(payload.state.as_deref())?;

    let deadline = state
        .deadline_service
        .compute_calendar_deadline(start_date, days, state_code)
        .await?;

    Ok(Json(DeadlineResponse {
        deadline: deadline.to_string(),
    }))
}

pub async fn business_day_handler(
    State(state): State<AppState>,
    Query(query): Query<BusinessDayQuery>,
) -> ApiResult<Json<BusinessDayResponse>> {
    let date = parse_iso_date("date", query.date.as_str())?;
    let state_code = parse_state(query.state.as_deref())?;

    let is_business_day = state
        .deadline_service
        .is_business_day(date, state_code)
        .await?;

    Ok(Json(BusinessDayResponse {
        date: date.to_string(),
        is_business_day,
    }))
}

pub async fn next_business_day_handler(
    State(state): State<AppState>,
    Query(query): Query<BusinessDayQuery>,
) -> ApiResult<Json<NextBusinessDayResponse>> {
    let date = parse_iso_date("date", query.date.as_str())?;
    let state_code = parse_state(query.state.as_deref())?;

    let next = state
        .deadline_service
        .next_business_day(date, state_code)
        .await?;

    Ok(Json(NextBusinessDayResponse {
        date: next.to_string(),
    }))
}

pub async fn remaining_business_days_handler(
    State(state): State<AppState>,
    Query(query): Query<RemainingBusinessDaysQuery>,
) -> ApiResult<Json<RemainingBusinessDaysResponse>> {
    let target_date = parse_iso_date("target_date", query.target_date.as_str())?;
    let state_code = parse_state(query.state.as_deref())?;

    let countdown = state
        .deadline_service
        .countdown(target_date, state_code)
        .await?;

    Ok(Json(RemainingBusinessDaysResponse {
        target_date: target_date.to_string(),
        business_days: countdown.business_days,
        urgency: countdown.urgency.as_str().to_owned(),
    }))
}

pub async fn holidays_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Query(query): Query<HolidayQuery>,
) -> ApiResult<Json<HolidayCalendarResponse>> {
    let state_code = parse_state(query.state.as_deref())?;

    let holidays = state.deadline_service.holidays(year, state_code).await?;

    Ok(Json(HolidayCalendarResponse {
        year: holidays.year(),
        state: holidays.state().map(|code| code.as_str().to_owned()),
        dates: holidays.iso_dates(),
    }))
}

#[cfg(test)]
mod tests;
