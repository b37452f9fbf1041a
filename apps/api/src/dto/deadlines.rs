use chrono::NaiveDate;
use jrclaw_core::{AppError, AppResult};
use jrclaw_domain::StateCode;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for a business-day deadline computation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/compute-deadline-request.ts"
)]
pub struct ComputeDeadlineRequest {
    pub start_date: String,
    #[ts(type = "number")]
    pub business_days: i64,
    pub state: Option<String>,
}

/// Incoming payload for a calendar-day deadline computation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/compute-calendar-deadline-request.ts"
)]
pub struct ComputeCalendarDeadlineRequest {
    pub start_date: String,
    #[ts(type = "number")]
    pub days: i64,
    pub state: Option<String>,
}

/// Computed deadline date.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/deadline-response.ts"
)]
pub struct DeadlineResponse {
    pub deadline: String,
}

#[derive(Debug, Deserialize)]
pub struct BusinessDayQuery {
    pub date: String,
    pub state: Option<String>,
}

/// Business-day classification of a single date.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/business-day-response.ts"
)]
pub struct BusinessDayResponse {
    pub date: String,
    pub is_business_day: bool,
}

/// First business day on or after the requested date.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/next-business-day-response.ts"
)]
pub struct NextBusinessDayResponse {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct RemainingBusinessDaysQuery {
    pub target_date: String,
    pub state: Option<String>,
}

/// Signed business-day distance from today to a deadline.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/remaining-business-days-response.ts"
)]
pub struct RemainingBusinessDaysResponse {
    pub target_date: String,
    #[ts(type = "number")]
    pub business_days: i64,
    pub urgency: String,
}

#[derive(Debug, Deserialize)]
pub struct HolidayQuery {
    pub state: Option<String>,
}

/// Non-business days of one year.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/holiday-calendar-response.ts"
)]
pub struct HolidayCalendarResponse {
    pub year: i32,
    pub state: Option<String>,
    pub dates: Vec<String>,
}

/// Parses an ISO `YYYY-MM-DD` transport date.
pub fn parse_iso_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|error| {
        AppError::Validation(format!("{field} must be an ISO date (YYYY-MM-DD): {error}"))
    })
}

/// Parses an optional state code, treating blank values as absent.
pub fn parse_state(value: Option<&str>) -> AppResult<Option<StateCode>> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(StateCode::parse)
        .transpose()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{parse_iso_date, parse_state};

    #[test]
    fn iso_dates_are_required() {
        assert_eq!(
            parse_iso_date("start_date", " 2025-03-10 ").ok(),
            NaiveDate::from_ymd_opt(2025, 3, 10)
        );
        assert!(parse_iso_date("start_date", "10/03/2025").is_err());
        assert!(parse_iso_date("start_date", "2025-02-30").is_err());
    }

    #[test]
    fn blank_state_is_treated_as_national() {
        assert!(matches!(parse_state(None), Ok(None)));
        assert!(matches!(parse_state(Some("  ")), Ok(None)));
        assert!(matches!(parse_state(Some("sp")), Ok(Some(_))));
        assert!(parse_state(Some("XX")).is_err());
    }
}
