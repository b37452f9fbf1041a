use std::num::NonZeroU32;

use jrclaw_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Largest accepted deadline length, in days.
pub const MAX_DAY_COUNT: u32 = 3_650;

/// Positive number of days used to count a procedural deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct DayCount(NonZeroU32);

impl DayCount {
    /// Validates a raw day count. Zero, negative and over-long counts are rejected.
    pub fn new(value: i64) -> AppResult<Self> {
        if value < 0 {
            return Err(AppError::Validation(format!(
                "day count must not be negative, got {value}"
            )));
        }

        u32::try_from(value)
            .ok()
            .filter(|days| *days <= MAX_DAY_COUNT)
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "day count must be between 1 and {MAX_DAY_COUNT}, got {value}"
                ))
            })
    }

    /// Returns the count.
    #[must_use]
    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i64> for DayCount {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayCount> for u32 {
    fn from(value: DayCount) -> Self {
        value.get()
    }
}

/// Urgency bucket of a tracked deadline given its signed business-day distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineUrgency {
    /// The deadline date has passed.
    Overdue,
    /// The deadline date is today.
    DueToday,
    /// One or two business days remain.
    Critical,
    /// Three to five business days remain.
    Warning,
    /// More than five business days remain.
    OnTrack,
}

impl DeadlineUrgency {
    /// Classifies a signed business-day distance (negative means overdue).
    #[must_use]
    pub fn from_remaining(business_days: i64) -> Self {
        match business_days {
            i64::MIN..=-1 => Self::Overdue,
            0 => Self::DueToday,
            1..=2 => Self::Critical,
            3..=5 => Self::Warning,
            _ => Self::OnTrack,
        }
    }

    /// Returns a stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due_today",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::OnTrack => "on_track",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DayCount, DeadlineUrgency, MAX_DAY_COUNT};

    #[test]
    fn day_count_rejects_negative_and_zero() {
        assert!(DayCount::new(-1).is_err());
        assert!(DayCount::new(0).is_err());
        assert!(DayCount::new(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(DayCount::new(15).map(|days| days.get()).ok(), Some(15));
    }

    #[test]
    fn day_count_is_capped() {
        let max = i64::from(MAX_DAY_COUNT);
        assert_eq!(
            DayCount::new(max).map(|days| days.get()).ok(),
            Some(MAX_DAY_COUNT)
        );
        assert!(DayCount::new(max + 1).is_err());
        assert!(DayCount::new(2_000_000).is_err());
    }

    #[test]
    fn urgency_buckets_cover_boundaries() {
        assert_eq!(DeadlineUrgency::from_remaining(-3), DeadlineUrgency::Overdue);
        assert_eq!(DeadlineUrgency::from_remaining(0), DeadlineUrgency::DueToday);
        assert_eq!(DeadlineUrgency::from_remaining(2), DeadlineUrgency::Critical);
        assert_eq!(DeadlineUrgency::from_remaining(3), DeadlineUrgency::Warning);
        assert_eq!(DeadlineUrgency::from_remaining(5), DeadlineUrgency::Warning);
        assert_eq!(DeadlineUrgency::from_remaining(6), DeadlineUrgency::OnTrack);
    }
}
