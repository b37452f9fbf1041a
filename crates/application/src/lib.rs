//! Application services and ports.

#![forbid(unsafe_code)]

mod calendar_ports;
mod deadline_service;
mod team_access_service;
mod team_ports;

pub use calendar_ports::{Clock, HolidayProvider};
pub use deadline_service::{DeadlineCountdown, DeadlineService};
pub use team_access_service::TeamAccessService;
pub use team_ports::TeamMemberRepository;
