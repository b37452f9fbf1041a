//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod calendar;
mod deadline;
mod member;
mod role;
mod security;
mod team;

pub use calendar::{
    HolidaySet, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, StateCode, ensure_supported_year,
    is_weekend,
};
pub use deadline::{DayCount, DeadlineUrgency, MAX_DAY_COUNT};
pub use member::{MemberId, TeamMember};
pub use role::{Role, is_role_at_least};
pub use security::{
    Permission, ensure_permission, get_permissions, has_all_permissions, has_any_permission,
    has_permission, role_value_has_permission,
};
pub use team::{
    ADVOGADO_TEAM_PERMISSIONS, RESTRICTED_TEAM_PERMISSIONS, SENIOR_EXTRA_TEAM_PERMISSIONS,
    TeamPermission, TeamRole, get_team_permissions, has_team_permission,
};
