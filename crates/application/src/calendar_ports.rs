use async_trait::async_trait;
use chrono::NaiveDate;

use jrclaw_core::AppResult;
use jrclaw_domain::{HolidaySet, StateCode};

/// Port resolving the non-business dates of one calendar year.
///
/// Implementations must be deterministic per `(year, state)` and safe to call
/// concurrently. `None` as state selects national holidays only.
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Returns holidays and forensic suspensions for the year and jurisdiction.
    async fn holidays_for_year(
        &self,
        year: i32,
        state: Option<StateCode>,
    ) -> AppResult<HolidaySet>;
}

/// Source of the caller's current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date without a time component.
    fn today(&self) -> NaiveDate;
}
