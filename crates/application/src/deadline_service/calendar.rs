use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use jrclaw_core::{AppError, AppResult};
use jrclaw_domain::{HolidaySet, StateCode, ensure_supported_year, is_weekend};

use crate::HolidayProvider;

/// Business-day view over a holiday provider for a single operation.
///
/// Each distinct year is requested from the provider once and reused for the
/// rest of the operation.
pub(super) struct BusinessCalendar<'a> {
    provider: &'a dyn HolidayProvider,
    state: Option<StateCode>,
    years: HashMap<i32, HolidaySet>,
}

impl<'a> BusinessCalendar<'a> {
    pub(super) fn new(provider: &'a dyn HolidayProvider, state: Option<StateCode>) -> Self {
        Self {
            provider,
            state,
            years: HashMap::new(),
        }
    }

    /// Loads the holiday set of the date's year before applying the weekend rule,
    /// so provider failures surface for weekend dates too.
    pub(super) async fn is_business_day(&mut self, date: NaiveDate) -> AppResult<bool> {
        let year = date.year();
        if !self.years.contains_key(&year) {
            ensure_supported_year(year)?;
            let holidays = self.provider.holidays_for_year(year, self.state).await?;
            self.years.insert(year, holidays);
        }

        let is_holiday = self
            .years
            .get(&year)
            .is_some_and(|holidays| holidays.contains(date));

        Ok(!is_weekend(date) && !is_holiday)
    }

    pub(super) async fn next_business_day(&mut self, date: NaiveDate) -> AppResult<NaiveDate> {
        let mut current = date;
        while !self.is_business_day(current).await? {
            current = next_day(current)?;
        }

        Ok(current)
    }

    /// Counts business days in the half-open range `(from, to]`.
    pub(super) async fn count_business_days_after(
        &mut self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<i64> {
        let mut count = 0_i64;
        let mut current = from;
        while current < to {
            current = next_day(current)?;
            if self.is_business_day(current).await? {
                count += 1;
            }
        }

        Ok(count)
    }
}

pub(super) fn next_day(date: NaiveDate) -> AppResult<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| AppError::Validation(format!("date '{date}' has no following day")))
}
