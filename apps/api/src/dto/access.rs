use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Effective permissions of one primary role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/role-permissions-response.ts"
)]
pub struct RolePermissionsResponse {
    pub role: String,
    pub permissions: Vec<String>,
}

/// How a multi-permission check combines its permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/permission-check-mode.ts"
)]
pub enum PermissionCheckMode {
    All,
    Any,
}

/// Incoming payload for a role permission check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/permission-check-request.ts"
)]
pub struct PermissionCheckRequest {
    pub role: String,
    pub permissions: Vec<String>,
    pub mode: PermissionCheckMode,
}

/// Outcome of an access check.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/permission-check-response.ts"
)]
pub struct PermissionCheckResponse {
    pub allowed: bool,
}

/// Incoming payload for a role ordering check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/role-at-least-request.ts"
)]
pub struct RoleAtLeastRequest {
    pub role: String,
    pub minimum_role: String,
}
