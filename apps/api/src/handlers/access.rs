use axum::Json;
use axum::extract::Path;
use jrclaw_domain::{
    Permission, Role, get_permissions, has_all_permissions, has_any_permission, is_role_at_least,
};

use crate::dto::{
    PermissionCheckMode, PermissionCheckRequest, PermissionCheckResponse, RoleAtLeastRequest,
    RolePermissionsResponse,
};

pub async fn role_permissions_handler(Path(role): Path<String>) -> Json<RolePermissionsResponse> {
    let role = Role::parse(role.as_str());

    Json(RolePermissionsResponse {
        role: role.as_str().to_owned(),
        permissions: get_permissions(role)
            .into_iter()
            .map(|permission| permission.as_str().to_owned())
            .collect(),
    })
}

/// Unrecognised permission values never grant access.
pub async fn check_permissions_handler(
    Json(payload): Json<PermissionCheckRequest>,
) -> Json<PermissionCheckResponse> {
    let role = Role::parse(payload.role.as_str());
    let parsed: Vec<Option<Permission>> = payload
        .permissions
        .iter()
        .map(|value| value.parse::<Permission>().ok())
        .collect();
    let known: Vec<Permission> = parsed.iter().flatten().copied().collect();

    let allowed = match payload.mode {
        PermissionCheckMode::All => {
            known.len() == parsed.len() && has_all_permissions(role, &known)
        }
        PermissionCheckMode::Any => has_any_permission(role, &known),
    };

    Json(PermissionCheckResponse { allowed })
}

pub async fn role_at_least_handler(
    Json(payload): Json<RoleAtLeastRequest>,
) -> Json<PermissionCheckResponse> {
    let allowed = is_role_at_least(
        Role::parse(payload.role.as_str()),
        Role::parse(payload.minimum_role.as_str()),
    );

    Json(PermissionCheckResponse { allowed })
}
