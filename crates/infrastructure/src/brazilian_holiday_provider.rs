use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{Datelike, Days, NaiveDate};
use jrclaw_application::HolidayProvider;
use jrclaw_core::{AppError, AppResult};
use jrclaw_domain::{HolidaySet, StateCode, ensure_supported_year};
use tracing::debug;

mod state_holidays;

use state_holidays::state_holidays;

const NATIONAL_FIXED_HOLIDAYS: &[(u32, u32)] = &[
    (1, 1),
    (4, 21),
    (5, 1),
    (9, 7),
    (10, 12),
    (11, 2),
    (11, 15),
    (12, 25),
];

/// First year in which Nov 20 (Zumbi e da Consciência Negra) is a national holiday.
const BLACK_CONSCIOUSNESS_NATIONAL_SINCE: i32 = 2024;

/// Settings for the Brazilian holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendarConfig {
    /// Treats Dec 20 through Jan 20 as suspended (CPC art. 220).
    pub include_forensic_recess: bool,
    /// Additional suspension dates, such as municipal holidays or court closures.
    pub extra_dates: Vec<NaiveDate>,
}

impl Default for HolidayCalendarConfig {
    fn default() -> Self {
        Self {
            include_forensic_recess: true,
            extra_dates: Vec::new(),
        }
    }
}

/// Holiday provider computing national, state and forensic non-business days.
///
/// Infallible for every year in the supported calendar range; other years are
/// rejected as validation errors.
#[derive(Debug, Clone, Default)]
pub struct BrazilianHolidayProvider {
    config: HolidayCalendarConfig,
}

impl BrazilianHolidayProvider {
    /// Creates a provider with the given calendar settings.
    #[must_use]
    pub fn new(config: HolidayCalendarConfig) -> Self {
        Self { config }
    }

    fn compute(&self, year: i32, state: Option<StateCode>) -> AppResult<HolidaySet> {
        ensure_supported_year(year)?;

        let mut dates = BTreeSet::new();

        for (month, day) in NATIONAL_FIXED_HOLIDAYS {
            dates.insert(ymd(year, *month, *day)?);
        }
        if year >= BLACK_CONSCIOUSNESS_NATIONAL_SINCE {
            dates.insert(ymd(year, 11, 20)?);
        }

        let easter = easter_sunday(year)?;
        for offset in [-48, -47, -2, 60] {
            dates.insert(shift(easter, offset)?);
        }

        if let Some(state) = state {
            for (month, day) in state_holidays(state) {
                dates.insert(ymd(year, *month, *day)?);
            }
        }

        if self.config.include_forensic_recess {
            for day in 1..=20 {
                dates.insert(ymd(year, 1, day)?);
            }
            for day in 20..=31 {
                dates.insert(ymd(year, 12, day)?);
            }
        }

        dates.extend(
            self.config
                .extra_dates
                .iter()
                .filter(|date| date.year() == year),
        );

        Ok(HolidaySet::new(year, state, dates))
    }
}

#[async_trait]
impl HolidayProvider for BrazilianHolidayProvider {
    async fn holidays_for_year(
        &self,
        year: i32,
        state: Option<StateCode>,
    ) -> AppResult<HolidaySet> {
        let holidays = self.compute(year, state)?;

        debug!(
            year,
            state = state.as_ref().map(StateCode::as_str).unwrap_or("national"),
            holiday_count = holidays.len(),
            "computed holiday calendar"
        );

        Ok(holidays)
    }
}

/// Gregorian Easter Sunday (anonymous Gregorian algorithm).
fn easter_sunday(year: i32) -> AppResult<NaiveDate> {
    if year < 1583 {
        return Err(AppError::Validation(format!(
            "holiday calendar is not available for year {year}"
        )));
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    let month = u32::try_from(month)
        .map_err(|error| AppError::Internal(format!("invalid easter month: {error}")))?;
    let day = u32::try_from(day)
        .map_err(|error| AppError::Internal(format!("invalid easter day: {error}")))?;

    ymd(year, month, day)
}

fn ymd(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::Validation(format!("invalid calendar date {year}-{month:02}-{day:02}"))
    })
}

fn shift(date: NaiveDate, offset: i64) -> AppResult<NaiveDate> {
    let shifted = if offset >= 0 {
        date.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(offset.unsigned_abs()))
    };

    shifted.ok_or_else(|| {
        AppError::Validation(format!(
            "date '{date}' shifted by {offset} days is out of range"
        ))
    })
}
