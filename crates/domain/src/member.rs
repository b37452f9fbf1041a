use std::fmt::{Display, Formatter};

use jrclaw_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::team::TeamRole;

/// Stable identifier of a team member record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(NonEmptyString);

impl MemberId {
    /// Creates a validated member identifier.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        NonEmptyString::new(value).map(Self)
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for MemberId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Team-module projection of a member: its team role and direct manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: MemberId,
    team_role: TeamRole,
    manager_id: Option<MemberId>,
}

impl TeamMember {
    /// Creates a team member projection.
    #[must_use]
    pub fn new(id: MemberId, team_role: TeamRole, manager_id: Option<MemberId>) -> Self {
        Self {
            id,
            team_role,
            manager_id,
        }
    }

    /// Returns the member identifier.
    #[must_use]
    pub fn id(&self) -> &MemberId {
        &self.id
    }

    /// Returns the member team role.
    #[must_use]
    pub fn team_role(&self) -> TeamRole {
        self.team_role
    }

    /// Returns the direct manager, if any.
    #[must_use]
    pub fn manager_id(&self) -> Option<&MemberId> {
        self.manager_id.as_ref()
    }
}
