use std::collections::BTreeSet;
use std::str::FromStr;

use jrclaw_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Application-wide permissions, namespaced as `resource:action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Allows reading cases and dockets.
    #[serde(rename = "cases:read")]
    CasesRead,
    /// Allows opening new cases.
    #[serde(rename = "cases:create")]
    CasesCreate,
    /// Allows editing cases.
    #[serde(rename = "cases:update")]
    CasesUpdate,
    /// Allows deleting cases.
    #[serde(rename = "cases:delete")]
    CasesDelete,
    /// Allows reading clients.
    #[serde(rename = "clients:read")]
    ClientsRead,
    /// Allows registering clients.
    #[serde(rename = "clients:create")]
    ClientsCreate,
    /// Allows editing clients.
    #[serde(rename = "clients:update")]
    ClientsUpdate,
    /// Allows deleting clients.
    #[serde(rename = "clients:delete")]
    ClientsDelete,
    /// Allows reading tracked deadlines.
    #[serde(rename = "deadlines:read")]
    DeadlinesRead,
    /// Allows registering deadlines.
    #[serde(rename = "deadlines:create")]
    DeadlinesCreate,
    /// Allows editing deadlines.
    #[serde(rename = "deadlines:update")]
    DeadlinesUpdate,
    /// Allows deleting deadlines.
    #[serde(rename = "deadlines:delete")]
    DeadlinesDelete,
    /// Allows reading documents.
    #[serde(rename = "documents:read")]
    DocumentsRead,
    /// Allows drafting documents.
    #[serde(rename = "documents:create")]
    DocumentsCreate,
    /// Allows editing documents.
    #[serde(rename = "documents:update")]
    DocumentsUpdate,
    /// Allows deleting documents.
    #[serde(rename = "documents:delete")]
    DocumentsDelete,
    /// Allows reading financial entries.
    #[serde(rename = "financial:read")]
    FinancialRead,
    /// Allows registering financial entries.
    #[serde(rename = "financial:create")]
    FinancialCreate,
    /// Allows editing financial entries.
    #[serde(rename = "financial:update")]
    FinancialUpdate,
    /// Allows deleting financial entries.
    #[serde(rename = "financial:delete")]
    FinancialDelete,
    /// Allows reading reports.
    #[serde(rename = "reports:read")]
    ReportsRead,
    /// Allows exporting reports.
    #[serde(rename = "reports:export")]
    ReportsExport,
    /// Allows listing users.
    #[serde(rename = "users:read")]
    UsersRead,
    /// Allows inviting users.
    #[serde(rename = "users:create")]
    UsersCreate,
    /// Allows editing users.
    #[serde(rename = "users:update")]
    UsersUpdate,
    /// Allows removing users.
    #[serde(rename = "users:delete")]
    UsersDelete,
    /// Allows reading firm settings.
    #[serde(rename = "settings:read")]
    SettingsRead,
    /// Allows changing firm settings.
    #[serde(rename = "settings:update")]
    SettingsUpdate,
    /// Allows reading the audit trail.
    #[serde(rename = "audit:read")]
    AuditRead,
    /// Allows reading data-subject requests.
    #[serde(rename = "lgpd:read")]
    LgpdRead,
    /// Allows exporting personal data for a data subject.
    #[serde(rename = "lgpd:export")]
    LgpdExport,
    /// Allows erasing personal data for a data subject.
    #[serde(rename = "lgpd:delete")]
    LgpdDelete,
    /// Allows using the document assistant.
    #[serde(rename = "ai:use")]
    AiUse,
    /// Allows managing the team module.
    #[serde(rename = "team:manage")]
    TeamManage,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CasesRead => "cases:read",
            Self::CasesCreate => "cases:create",
            Self::CasesUpdate => "cases:update",
            Self::CasesDelete => "cases:delete",
            Self::ClientsRead => "clients:read",
            Self::ClientsCreate => "clients:create",
            Self::ClientsUpdate => "clients:update",
            Self::ClientsDelete => "clients:delete",
            Self::DeadlinesRead => "deadlines:read",
            Self::DeadlinesCreate => "deadlines:create",
            Self::DeadlinesUpdate => "deadlines:update",
            Self::DeadlinesDelete => "deadlines:delete",
            Self::DocumentsRead => "documents:read",
            Self::DocumentsCreate => "documents:create",
            Self::DocumentsUpdate => "documents:update",
            Self::DocumentsDelete => "documents:delete",
            Self::FinancialRead => "financial:read",
            Self::FinancialCreate => "financial:create",
            Self::FinancialUpdate => "financial:update",
            Self::FinancialDelete => "financial:delete",
            Self::ReportsRead => "reports:read",
            Self::ReportsExport => "reports:export",
            Self::UsersRead => "users:read",
            Self::UsersCreate => "users:create",
            Self::UsersUpdate => "users:update",
            Self::UsersDelete => "users:delete",
            Self::SettingsRead => "settings:read",
            Self::SettingsUpdate => "settings:update",
            Self::AuditRead => "audit:read",
            Self::LgpdRead => "lgpd:read",
            Self::LgpdExport => "lgpd:export",
            Self::LgpdDelete => "lgpd:delete",
            Self::AiUse => "ai:use",
            Self::TeamManage => "team:manage",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::CasesRead,
            Permission::CasesCreate,
            Permission::CasesUpdate,
            Permission::CasesDelete,
            Permission::ClientsRead,
            Permission::ClientsCreate,
            Permission::ClientsUpdate,
            Permission::ClientsDelete,
            Permission::DeadlinesRead,
            Permission::DeadlinesCreate,
            Permission::DeadlinesUpdate,
            Permission::DeadlinesDelete,
            Permission::DocumentsRead,
            Permission::DocumentsCreate,
            Permission::DocumentsUpdate,
            Permission::DocumentsDelete,
            Permission::FinancialRead,
            Permission::FinancialCreate,
            Permission::FinancialUpdate,
            Permission::FinancialDelete,
            Permission::ReportsRead,
            Permission::ReportsExport,
            Permission::UsersRead,
            Permission::UsersCreate,
            Permission::UsersUpdate,
            Permission::UsersDelete,
            Permission::SettingsRead,
            Permission::SettingsUpdate,
            Permission::AuditRead,
            Permission::LgpdRead,
            Permission::LgpdExport,
            Permission::LgpdDelete,
            Permission::AiUse,
            Permission::TeamManage,
        ];

        ALL
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> AppResult<Self> {
        Self::from_str(value)
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

/// Permissions owned directly by each role, before inheritance.
fn direct_permissions(role: Role) -> &'static [Permission] {
    use Permission::*;

    match role {
        Role::Admin => &[
            UsersCreate,
            UsersUpdate,
            UsersDelete,
            SettingsRead,
            SettingsUpdate,
            AuditRead,
            LgpdRead,
            LgpdExport,
            LgpdDelete,
        ],
        Role::Socio => &[
            CasesDelete,
            ClientsDelete,
            DeadlinesDelete,
            DocumentsDelete,
            FinancialCreate,
            FinancialUpdate,
            FinancialDelete,
            ReportsExport,
            UsersRead,
            TeamManage,
        ],
        Role::Advogado => &[
            CasesCreate,
            CasesUpdate,
            ClientsCreate,
            ClientsUpdate,
            DeadlinesCreate,
            DeadlinesUpdate,
            DocumentsUpdate,
            FinancialRead,
            ReportsRead,
        ],
        Role::Estagiario => &[
            CasesRead,
            ClientsRead,
            DeadlinesRead,
            DocumentsRead,
            DocumentsCreate,
            AiUse,
        ],
        Role::Unknown => &[],
    }
}

/// Returns the effective permissions of a role.
///
/// A role inherits every permission of each known role at or below its level.
/// Unknown roles resolve to an empty set.
#[must_use]
pub fn get_permissions(role: Role) -> BTreeSet<Permission> {
    if !role.is_known() {
        return BTreeSet::new();
    }

    Role::ranked()
        .iter()
        .filter(|candidate| candidate.level() <= role.level())
        .flat_map(|candidate| direct_permissions(*candidate).iter().copied())
        .collect()
}

/// Returns whether the role holds the permission.
#[must_use]
pub fn has_permission(role: Role, permission: Permission) -> bool {
    get_permissions(role).contains(&permission)
}

/// Returns whether the role holds every listed permission.
#[must_use]
pub fn has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    let effective = get_permissions(role);
    permissions
        .iter()
        .all(|permission| effective.contains(permission))
}

/// Returns whether the role holds at least one listed permission.
#[must_use]
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    let effective = get_permissions(role);
    permissions
        .iter()
        .any(|permission| effective.contains(permission))
}

/// String-level permission check used at transport boundaries.
///
/// Unknown role or permission values are denied.
#[must_use]
pub fn role_value_has_permission(role: &str, permission: &str) -> bool {
    Permission::from_str(permission)
        .map(|permission| has_permission(Role::parse(role), permission))
        .unwrap_or(false)
}

/// Ensures the role holds the permission.
pub fn ensure_permission(role: Role, permission: Permission) -> AppResult<()> {
    if has_permission(role, permission) {
        return Ok(());
    }

    Err(AppError::Forbidden(format!(
        "role '{}' is missing permission '{}'",
        role.as_str(),
        permission.as_str()
    )))
}
