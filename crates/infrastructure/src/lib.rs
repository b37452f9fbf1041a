//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod brazilian_holiday_provider;
mod caching_holiday_provider;
mod in_memory_team_member_repository;
mod postgres_team_member_repository;
mod system_clock;

pub use brazilian_holiday_provider::{BrazilianHolidayProvider, HolidayCalendarConfig};
pub use caching_holiday_provider::CachingHolidayProvider;
pub use in_memory_team_member_repository::InMemoryTeamMemberRepository;
pub use postgres_team_member_repository::PostgresTeamMemberRepository;
pub use system_clock::SystemClock;
