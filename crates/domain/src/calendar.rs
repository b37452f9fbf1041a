use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use jrclaw_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// First calendar year the holiday calendar covers.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;

/// Last calendar year the holiday calendar covers.
pub const MAX_SUPPORTED_YEAR: i32 = 2200;

/// Rejects years outside the supported holiday calendar range.
pub fn ensure_supported_year(year: i32) -> AppResult<()> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        return Ok(());
    }

    Err(AppError::Validation(format!(
        "year {year} is outside the supported calendar range \
         {MIN_SUPPORTED_YEAR}..={MAX_SUPPORTED_YEAR}"
    )))
}

/// Brazilian federative unit (UF) code used to select state holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StateCode {
    /// Acre.
    Ac,
    /// Alagoas.
    Al,
    /// Amapá.
    Ap,
    /// Amazonas.
    Am,
    /// Bahia.
    Ba,
    /// Ceará.
    Ce,
    /// Distrito Federal.
    Df,
    /// Espírito Santo.
    Es,
    /// Goiás.
    Go,
    /// Maranhão.
    Ma,
    /// Mato Grosso.
    Mt,
    /// Mato Grosso do Sul.
    Ms,
    /// Minas Gerais.
    Mg,
    /// Pará.
    Pa,
    /// Paraíba.
    Pb,
    /// Paraná.
    Pr,
    /// Pernambuco.
    Pe,
    /// Piauí.
    Pi,
    /// Rio de Janeiro.
    Rj,
    /// Rio Grande do Norte.
    Rn,
    /// Rio Grande do Sul.
    Rs,
    /// Rondônia.
    Ro,
    /// Roraima.
    Rr,
    /// Santa Catarina.
    Sc,
    /// São Paulo.
    Sp,
    /// Sergipe.
    Se,
    /// Tocantins.
    To,
}

impl StateCode {
    /// Parses a two-letter UF code, case-insensitively.
    pub fn parse(value: &str) -> AppResult<Self> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::all()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| AppError::Validation(format!("unknown state code '{}'", value.trim())))
    }

    /// Returns the upper-case code.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// Returns every known state code.
    pub fn all() -> impl Iterator<Item = Self> {
        const ALL: [StateCode; 27] = [
            StateCode::Ac,
            StateCode::Al,
            StateCode::Ap,
            StateCode::Am,
            StateCode::Ba,
            StateCode::Ce,
            StateCode::Df,
            StateCode::Es,
            StateCode::Go,
            StateCode::Ma,
            StateCode::Mt,
            StateCode::Ms,
            StateCode::Mg,
            StateCode::Pa,
            StateCode::Pb,
            StateCode::Pr,
            StateCode::Pe,
            StateCode::Pi,
            StateCode::Rj,
            StateCode::Rn,
            StateCode::Rs,
            StateCode::Ro,
            StateCode::Rr,
            StateCode::Sc,
            StateCode::Sp,
            StateCode::Se,
            StateCode::To,
        ];

        ALL.into_iter()
    }
}

impl FromStr for StateCode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for StateCode {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<StateCode> for String {
    fn from(value: StateCode) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for StateCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Returns whether the date falls on Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Non-business dates (holidays and forensic suspensions) of one calendar year
/// for one jurisdiction. Weekends are not listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    year: i32,
    state: Option<StateCode>,
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Builds a holiday set, keeping only dates inside `year`.
    #[must_use]
    pub fn new(
        year: i32,
        state: Option<StateCode>,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            year,
            state,
            dates: dates
                .into_iter()
                .filter(|date| date.year() == year)
                .collect(),
        }
    }

    /// Returns an empty set for the year.
    #[must_use]
    pub fn empty(year: i32, state: Option<StateCode>) -> Self {
        Self::new(year, state, [])
    }

    /// Returns the calendar year covered by the set.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the jurisdiction, `None` meaning national holidays only.
    #[must_use]
    pub fn state(&self) -> Option<StateCode> {
        self.state
    }

    /// Returns whether the date is listed.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the number of listed dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether no date is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates listed dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Returns listed dates as ISO `YYYY-MM-DD` strings.
    #[must_use]
    pub fn iso_dates(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Days, NaiveDate, Weekday};
    use proptest::prelude::*;

    use super::{
        HolidaySet, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, StateCode, ensure_supported_year,
        is_weekend,
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    #[test]
    fn state_code_normalizes_case_and_whitespace() {
        let parsed = StateCode::parse(" sp ");
        assert_eq!(parsed.map(|code| code.to_string()).unwrap_or_default(), "SP");
    }

    #[test]
    fn state_code_rejects_unknown_values() {
        assert!(StateCode::parse("XX").is_err());
        assert!(StateCode::parse("SAO").is_err());
        assert!(StateCode::parse("").is_err());
    }

    #[test]
    fn every_state_code_roundtrips() {
        assert_eq!(StateCode::all().count(), 27);
        for code in StateCode::all() {
            assert_eq!(StateCode::parse(code.as_str()).ok(), Some(code));
        }
    }

    #[test]
    fn state_code_deserializes_from_string() {
        let parsed: Result<StateCode, _> = serde_json::from_str("\"rj\"");
        assert_eq!(parsed.ok().map(|code| code.to_string()), Some("RJ".to_owned()));
        let invalid: Result<StateCode, _> = serde_json::from_str("\"ZZ\"");
        assert!(invalid.is_err());
    }

    #[test]
    fn supported_year_range_is_inclusive() {
        assert!(ensure_supported_year(MIN_SUPPORTED_YEAR).is_ok());
        assert!(ensure_supported_year(MAX_SUPPORTED_YEAR).is_ok());
        assert!(ensure_supported_year(MIN_SUPPORTED_YEAR - 1).is_err());
        assert!(ensure_supported_year(MAX_SUPPORTED_YEAR + 1).is_err());
        assert!(ensure_supported_year(9000).is_err());
    }

    #[test]
    fn holiday_set_drops_dates_outside_year() {
        let set = HolidaySet::new(2025, None, [date(2025, 1, 1), date(2026, 1, 1)]);
        assert_eq!(set.len(), 1);
        assert!(set.contains(date(2025, 1, 1)));
        assert!(!set.contains(date(2026, 1, 1)));
        assert_eq!(set.iso_dates(), vec!["2025-01-01".to_owned()]);
    }

    #[test]
    fn known_weekdays_are_classified() {
        assert!(is_weekend(date(2025, 3, 1)));
        assert!(is_weekend(date(2025, 3, 2)));
        assert!(!is_weekend(date(2025, 3, 3)));
    }

    proptest! {
        #[test]
        fn weekend_matches_weekday(offset in 0_u64..20_000) {
            let day = date(2000, 1, 1)
                .checked_add_days(Days::new(offset))
                .unwrap_or_default();
            let expected = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
            prop_assert_eq!(is_weekend(day), expected);
        }
    }
}
