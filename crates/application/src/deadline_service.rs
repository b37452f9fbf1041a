use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};
use jrclaw_core::{AppError, AppResult};
use jrclaw_domain::{DayCount, DeadlineUrgency, HolidaySet, StateCode, ensure_supported_year};

use crate::{Clock, HolidayProvider};

mod calendar;

use calendar::{BusinessCalendar, next_day};

/// Application service computing procedural deadlines under CPC art. 219.
///
/// The start date is excluded from the count, the landing date is included,
/// and a landing date that is not a business day rolls forward.
#[derive(Clone)]
pub struct DeadlineService {
    holiday_provider: Arc<dyn HolidayProvider>,
    clock: Arc<dyn Clock>,
}

/// Signed business-day distance to a tracked deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineCountdown {
    /// Positive when days remain, negative when overdue.
    pub business_days: i64,
    /// Urgency bucket derived from `business_days`.
    pub urgency: DeadlineUrgency,
}

impl DeadlineService {
    /// Creates a deadline service from a holiday provider and clock.
    #[must_use]
    pub fn new(holiday_provider: Arc<dyn HolidayProvider>, clock: Arc<dyn Clock>) -> Self {
        Self {
            holiday_provider,
            clock,
        }
    }

    /// Returns whether the date is a weekday absent from the holiday set of its own year.
    pub async fn is_business_day(
        &self,
        date: NaiveDate,
        state: Option<StateCode>,
    ) -> AppResult<bool> {
        self.calendar(state).is_business_day(date).await
    }

    /// Computes the deadline landing `business_days` business days after `start_date`.
    pub async fn compute_deadline(
        &self,
        start_date: NaiveDate,
        business_days: DayCount,
        state: Option<StateCode>,
    ) -> AppResult<NaiveDate> {
        let mut calendar = self.calendar(state);
        let mut remaining = business_days.get();
        let mut current = start_date;

        while remaining > 0 {
            current = next_day(current)?;
            if calendar.is_business_day(current).await? {
                remaining -= 1;
            }
        }

        calendar.next_business_day(current).await
    }

    /// Computes a deadline counted in consecutive calendar days.
    ///
    /// Only the landing date is adjusted: it rolls forward to the next business day.
    pub async fn compute_calendar_deadline(
        &self,
        start_date: NaiveDate,
        calendar_days: DayCount,
        state: Option<StateCode>,
    ) -> AppResult<NaiveDate> {
        let landing = start_date
            .checked_add_days(Days::new(u64::from(calendar_days.get())))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "deadline of {} days from '{start_date}' is out of range",
                    calendar_days.get()
                ))
            })?;

        self.calendar(state).next_business_day(landing).await
    }

    /// Returns the date itself when it is a business day, otherwise the next one.
    pub async fn next_business_day(
        &self,
        date: NaiveDate,
        state: Option<StateCode>,
    ) -> AppResult<NaiveDate> {
        self.calendar(state).next_business_day(date).await
    }

    /// Counts business days from today to `target_date`.
    ///
    /// Positive values are days remaining, negative values days overdue.
    pub async fn business_days_until(
        &self,
        target_date: NaiveDate,
        state: Option<StateCode>,
    ) -> AppResult<i64> {
        self.business_days_between(self.clock.today(), target_date, state)
            .await
    }

    /// Counts business days after `from` up to and including `to`.
    ///
    /// When `to` precedes `from` the count runs from `to` towards `from` and is negated.
    /// Both dates must fall inside the supported calendar years.
    pub async fn business_days_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        state: Option<StateCode>,
    ) -> AppResult<i64> {
        ensure_supported_year(from.year())?;
        ensure_supported_year(to.year())?;

        let mut calendar = self.calendar(state);

        if to >= from {
            calendar.count_business_days_after(from, to).await
        } else {
            calendar
                .count_business_days_after(to, from)
                .await
                .map(|count| -count)
        }
    }

    /// Returns the signed distance to a tracked deadline with its urgency bucket.
    pub async fn countdown(
        &self,
        target_date: NaiveDate,
        state: Option<StateCode>,
    ) -> AppResult<DeadlineCountdown> {
        let business_days = self.business_days_until(target_date, state).await?;

        Ok(DeadlineCountdown {
            business_days,
            urgency: DeadlineUrgency::from_remaining(business_days),
        })
    }

    /// Returns the holiday set used for the year and jurisdiction.
    pub async fn holidays(&self, year: i32, state: Option<StateCode>) -> AppResult<HolidaySet> {
        ensure_supported_year(year)?;
        self.holiday_provider.holidays_for_year(year, state).await
    }

    fn calendar(&self, state: Option<StateCode>) -> BusinessCalendar<'_> {
        BusinessCalendar::new(self.holiday_provider.as_ref(), state)
    }
}
