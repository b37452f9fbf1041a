mod access;
mod deadlines;
mod health;
mod team;

pub use access::{
    PermissionCheckMode, PermissionCheckRequest, PermissionCheckResponse, RoleAtLeastRequest,
    RolePermissionsResponse,
};
pub use deadlines::{
    BusinessDayQuery, BusinessDayResponse, ComputeCalendarDeadlineRequest,
    ComputeDeadlineRequest, DeadlineResponse, HolidayCalendarResponse, HolidayQuery,
    NextBusinessDayResponse, RemainingBusinessDaysQuery, RemainingBusinessDaysResponse,
    parse_iso_date, parse_state,
};
pub use health::{HealthDependencyStatus, HealthResponse};
pub use team::{
    ManagerRelationResponse, MemberVisibilityQuery, MemberVisibilityResponse,
    TeamPermissionsQuery, TeamPermissionsResponse,
};

#[cfg(test)]
mod tests {
    use super::{
        BusinessDayResponse, ComputeCalendarDeadlineRequest, ComputeDeadlineRequest,
        DeadlineResponse, HealthDependencyStatus, HealthResponse, HolidayCalendarResponse,
        ManagerRelationResponse, MemberVisibilityResponse, NextBusinessDayResponse,
        PermissionCheckMode, PermissionCheckRequest, PermissionCheckResponse,
        RemainingBusinessDaysResponse, RoleAtLeastRequest, RolePermissionsResponse,
        TeamPermissionsResponse,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        ComputeDeadlineRequest::export(&config)?;
        ComputeCalendarDeadlineRequest::export(&config)?;
        DeadlineResponse::export(&config)?;
        BusinessDayResponse::export(&config)?;
        NextBusinessDayResponse::export(&config)?;
        RemainingBusinessDaysResponse::export(&config)?;
        HolidayCalendarResponse::export(&config)?;
        RolePermissionsResponse::export(&config)?;
        PermissionCheckMode::export(&config)?;
        PermissionCheckRequest::export(&config)?;
        PermissionCheckResponse::export(&config)?;
        RoleAtLeastRequest::export(&config)?;
        TeamPermissionsResponse::export(&config)?;
        MemberVisibilityResponse::export(&config)?;
        ManagerRelationResponse::export(&config)?;
        HealthDependencyStatus::export(&config)?;
        HealthResponse::export(&config)?;
        ErrorResponse::export(&config)?;

        Ok(())
    }
}
