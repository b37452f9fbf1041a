use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Deserialize)]
pub struct TeamPermissionsQuery {
    pub primary_role: String,
    pub team_role: Option<String>,
}

/// Team-module permissions resolved for a role pair.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/team-permissions-response.ts"
)]
pub struct TeamPermissionsResponse {
    pub permissions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MemberVisibilityQuery {
    pub viewer_role: String,
    pub viewer_member_id: String,
}

/// Whether a viewer may see a member's team data.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/member-visibility-response.ts"
)]
pub struct MemberVisibilityResponse {
    pub can_view: bool,
}

/// Whether a direct reporting line exists between two members.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/manager-relation-response.ts"
)]
pub struct ManagerRelationResponse {
    pub is_manager: bool,
}
