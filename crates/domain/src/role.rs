use serde::{Deserialize, Serialize};

/// Primary application role assigned to every user.
///
/// Roles form a strict total order (`Admin > Socio > Advogado > Estagiario`).
/// Any string that is not a known role parses to [`Role::Unknown`], which sits
/// below every known role and owns no permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Firm administrator.
    Admin,
    /// Partner.
    Socio,
    /// Lawyer.
    Advogado,
    /// Intern.
    Estagiario,
    /// Any unrecognised role value.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Parses a stored or transport value. Never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "ADMIN" => Self::Admin,
            "SOCIO" => Self::Socio,
            "ADVOGADO" => Self::Advogado,
            "ESTAGIARIO" => Self::Estagiario,
            _ => Self::Unknown,
        }
    }

    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Socio => "SOCIO",
            Self::Advogado => "ADVOGADO",
            Self::Estagiario => "ESTAGIARIO",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns the ordering level. Only used for comparisons.
    #[must_use]
    pub fn level(&self) -> u8 {
        match self {
            Self::Admin => 100,
            Self::Socio => 75,
            Self::Advogado => 50,
            Self::Estagiario => 25,
            Self::Unknown => 0,
        }
    }

    /// Returns whether the role is a recognised member of the hierarchy.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns whether the role is a firm leadership role.
    #[must_use]
    pub fn is_leadership(&self) -> bool {
        matches!(self, Self::Admin | Self::Socio)
    }

    /// Returns all known roles from highest to lowest.
    #[must_use]
    pub fn ranked() -> &'static [Self] {
        const RANKED: &[Role] = &[Role::Admin, Role::Socio, Role::Advogado, Role::Estagiario];

        RANKED
    }
}

/// Returns whether `role` sits at or above `minimum_role`.
///
/// Unknown roles on either side always fail the comparison.
#[must_use]
pub fn is_role_at_least(role: Role, minimum_role: Role) -> bool {
    role.is_known() && minimum_role.is_known() && role.level() >= minimum_role.level()
}
