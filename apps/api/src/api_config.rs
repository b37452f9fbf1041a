use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use chrono::NaiveDate;
use jrclaw_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: Option<String>,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub include_forensic_recess: bool,
    pub extra_holiday_dates: Vec<NaiveDate>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());
        if migrate_only && database_url.is_none() {
            return Err(AppError::Validation(
                "DATABASE_URL is required to run migrations".to_owned(),
            ));
        }

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = match env::var("API_PORT") {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            Err(_) => 3001,
        };

        let include_forensic_recess = match env::var("HOLIDAY_FORENSIC_RECESS") {
            Ok(value) => parse_bool("HOLIDAY_FORENSIC_RECESS", value.as_str())?,
            Err(_) => true,
        };
        let extra_holiday_dates = env::var("HOLIDAY_EXTRA_DATES")
            .map(|value| parse_date_list("HOLIDAY_EXTRA_DATES", value.as_str()))
            .unwrap_or_else(|_| Ok(Vec::new()))?;

        Ok(Self {
            migrate_only,
            database_url,
            frontend_url,
            api_host,
            api_port,
            include_forensic_recess,
            extra_holiday_dates,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AppError::Validation(format!(
            "{name} must be 'true' or 'false', got '{other}'"
        ))),
    }
}

fn parse_date_list(name: &str, value: &str) -> Result<Vec<NaiveDate>, AppError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            NaiveDate::parse_from_str(entry, "%Y-%m-%d").map_err(|error| {
                AppError::Validation(format!("invalid date '{entry}' in {name}: {error}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{parse_bool, parse_date_list};

    #[test]
    fn boolean_flags_accept_common_spellings() {
        assert!(matches!(parse_bool("FLAG", "TRUE"), Ok(true)));
        assert!(matches!(parse_bool("FLAG", " no "), Ok(false)));
        assert!(parse_bool("FLAG", "maybe").is_err());
    }

    #[test]
    fn date_lists_skip_blank_entries() {
        let parsed = parse_date_list("DATES", "2025-01-25, ,2025-11-20");
        assert_eq!(
            parsed.ok(),
            Some(vec![
                NaiveDate::from_ymd_opt(2025, 1, 25).unwrap_or_default(),
                NaiveDate::from_ymd_opt(2025, 11, 20).unwrap_or_default(),
            ])
        );
        assert!(parse_date_list("DATES", "25/01/2025").is_err());
    }
}
