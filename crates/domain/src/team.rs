use std::collections::BTreeSet;
use std::str::FromStr;

use jrclaw_core::AppError;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Secondary role scoped to the team-management module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamRole {
    /// Partner inside the team module.
    Socio,
    /// Senior lawyer, may manage other members.
    AdvogadoSenior,
    /// Mid-level lawyer.
    AdvogadoPleno,
    /// Junior lawyer.
    AdvogadoJunior,
    /// Intern.
    Estagiario,
    /// Paralegal staff.
    Paralegal,
    /// Administrative staff.
    Administrativo,
    /// Any unrecognised team role value.
    #[serde(other)]
    Unknown,
}

impl TeamRole {
    /// Parses a stored or transport value. Never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "SOCIO" => Self::Socio,
            "ADVOGADO_SENIOR" => Self::AdvogadoSenior,
            "ADVOGADO_PLENO" => Self::AdvogadoPleno,
            "ADVOGADO_JUNIOR" => Self::AdvogadoJunior,
            "ESTAGIARIO" => Self::Estagiario,
            "PARALEGAL" => Self::Paralegal,
            "ADMINISTRATIVO" => Self::Administrativo,
            _ => Self::Unknown,
        }
    }

    /// Returns a stable storage value for this team role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Socio => "SOCIO",
            Self::AdvogadoSenior => "ADVOGADO_SENIOR",
            Self::AdvogadoPleno => "ADVOGADO_PLENO",
            Self::AdvogadoJunior => "ADVOGADO_JUNIOR",
            Self::Estagiario => "ESTAGIARIO",
            Self::Paralegal => "PARALEGAL",
            Self::Administrativo => "ADMINISTRATIVO",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns whether members holding this team role may supervise others.
    #[must_use]
    pub fn can_supervise(&self) -> bool {
        matches!(self, Self::Socio | Self::AdvogadoSenior)
    }
}

/// Permissions enforced inside the team-management module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamPermission {
    /// Allows viewing one's own profile.
    ViewOwnProfile,
    /// Allows editing one's own profile.
    EditOwnProfile,
    /// Allows viewing one's own goals.
    ViewOwnGoals,
    /// Allows submitting wellbeing check-ins.
    SubmitCheckin,
    /// Allows requesting time off.
    RequestTimeOff,
    /// Allows viewing one's own performance indicators.
    ViewOwnPerformance,
    /// Allows viewing direct reports.
    ViewTeamMembers,
    /// Allows viewing the workload of direct reports.
    ViewTeamWorkload,
    /// Allows viewing goals of direct reports.
    ViewTeamGoals,
    /// Allows setting goals for direct reports.
    ManageTeamGoals,
    /// Allows scheduling one-on-one meetings.
    ScheduleOneOnOne,
    /// Allows viewing the aggregated wellbeing dashboard.
    ViewWellbeingDashboard,
    /// Allows approving time-off requests.
    ApproveTimeOff,
    /// Allows adding and removing team members.
    ManageTeamMembers,
    /// Allows changing team roles and reporting lines.
    ManageTeamRoles,
    /// Allows viewing performance indicators of every member.
    ViewAllPerformance,
    /// Allows running performance reviews.
    ManagePerformanceReviews,
    /// Allows exporting team analytics.
    ExportTeamReports,
}

impl TeamPermission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewOwnProfile => "VIEW_OWN_PROFILE",
            Self::EditOwnProfile => "EDIT_OWN_PROFILE",
            Self::ViewOwnGoals => "VIEW_OWN_GOALS",
            Self::SubmitCheckin => "SUBMIT_CHECKIN",
            Self::RequestTimeOff => "REQUEST_TIME_OFF",
            Self::ViewOwnPerformance => "VIEW_OWN_PERFORMANCE",
            Self::ViewTeamMembers => "VIEW_TEAM_MEMBERS",
            Self::ViewTeamWorkload => "VIEW_TEAM_WORKLOAD",
            Self::ViewTeamGoals => "VIEW_TEAM_GOALS",
            Self::ManageTeamGoals => "MANAGE_TEAM_GOALS",
            Self::ScheduleOneOnOne => "SCHEDULE_ONE_ON_ONE",
            Self::ViewWellbeingDashboard => "VIEW_WELLBEING_DASHBOARD",
            Self::ApproveTimeOff => "APPROVE_TIME_OFF",
            Self::ManageTeamMembers => "MANAGE_TEAM_MEMBERS",
            Self::ManageTeamRoles => "MANAGE_TEAM_ROLES",
            Self::ViewAllPerformance => "VIEW_ALL_PERFORMANCE",
            Self::ManagePerformanceReviews => "MANAGE_PERFORMANCE_REVIEWS",
            Self::ExportTeamReports => "EXPORT_TEAM_REPORTS",
        }
    }

    /// Returns all team permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[TeamPermission] = &[
            TeamPermission::ViewOwnProfile,
            TeamPermission::EditOwnProfile,
            TeamPermission::ViewOwnGoals,
            TeamPermission::SubmitCheckin,
            TeamPermission::RequestTimeOff,
            TeamPermission::ViewOwnPerformance,
            TeamPermission::ViewTeamMembers,
            TeamPermission::ViewTeamWorkload,
            TeamPermission::ViewTeamGoals,
            TeamPermission::ManageTeamGoals,
            TeamPermission::ScheduleOneOnOne,
            TeamPermission::ViewWellbeingDashboard,
            TeamPermission::ApproveTimeOff,
            TeamPermission::ManageTeamMembers,
            TeamPermission::ManageTeamRoles,
            TeamPermission::ViewAllPerformance,
            TeamPermission::ManagePerformanceReviews,
            TeamPermission::ExportTeamReports,
        ];

        ALL
    }
}

impl FromStr for TeamPermission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| {
                AppError::Validation(format!("unknown team permission value '{value}'"))
            })
    }
}

/// Most restricted set, granted to interns, support staff and unknown roles.
pub const RESTRICTED_TEAM_PERMISSIONS: &[TeamPermission] = &[
    TeamPermission::ViewOwnProfile,
    TeamPermission::EditOwnProfile,
    TeamPermission::ViewOwnGoals,
    TeamPermission::SubmitCheckin,
    TeamPermission::RequestTimeOff,
];

/// Self-service set granted to lawyers.
pub const ADVOGADO_TEAM_PERMISSIONS: &[TeamPermission] = &[
    TeamPermission::ViewOwnProfile,
    TeamPermission::EditOwnProfile,
    TeamPermission::ViewOwnGoals,
    TeamPermission::SubmitCheckin,
    TeamPermission::RequestTimeOff,
    TeamPermission::ViewOwnPerformance,
];

/// Supervision set added on top of the lawyer set for senior lawyers.
///
/// Restates `RequestTimeOff` and `ViewOwnPerformance`; resolution deduplicates.
pub const SENIOR_EXTRA_TEAM_PERMISSIONS: &[TeamPermission] = &[
    TeamPermission::RequestTimeOff,
    TeamPermission::ViewOwnPerformance,
    TeamPermission::ViewTeamMembers,
    TeamPermission::ViewTeamWorkload,
    TeamPermission::ViewTeamGoals,
    TeamPermission::ManageTeamGoals,
    TeamPermission::ScheduleOneOnOne,
    TeamPermission::ViewWellbeingDashboard,
];

/// Resolves the team-module permissions for a primary role and optional team role.
///
/// The result is deduplicated and ordered by declaration.
#[must_use]
pub fn get_team_permissions(
    primary_role: Role,
    team_role: Option<TeamRole>,
) -> Vec<TeamPermission> {
    if primary_role.is_leadership() || team_role == Some(TeamRole::Socio) {
        return TeamPermission::all().to_vec();
    }

    let resolved: BTreeSet<TeamPermission> = match (primary_role, team_role) {
        (Role::Advogado, Some(TeamRole::AdvogadoSenior)) => ADVOGADO_TEAM_PERMISSIONS
            .iter()
            .chain(SENIOR_EXTRA_TEAM_PERMISSIONS)
            .copied()
            .collect(),
        (Role::Advogado, Some(TeamRole::Paralegal | TeamRole::Administrativo)) => {
            RESTRICTED_TEAM_PERMISSIONS.iter().copied().collect()
        }
        (Role::Advogado, _) => ADVOGADO_TEAM_PERMISSIONS.iter().copied().collect(),
        _ => RESTRICTED_TEAM_PERMISSIONS.iter().copied().collect(),
    };

    resolved.into_iter().collect()
}

/// Returns whether the role pair holds the team permission.
#[must_use]
pub fn has_team_permission(
    primary_role: Role,
    team_role: Option<TeamRole>,
    permission: TeamPermission,
) -> bool {
    get_team_permissions(primary_role, team_role).contains(&permission)
}
