use axum::Json;
use axum::extract::{Path, Query, State};
use jrclaw_domain::{MemberId, Role, TeamRole, get_team_permissions};

use crate::dto::{
    ManagerRelationResponse, MemberVisibilityQuery, MemberVisibilityResponse,
    TeamPermissionsQuery, TeamPermissionsResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn team_permissions_handler(
    Query(query): Query<TeamPermissionsQuery>,
) -> Json<TeamPermissionsResponse> {
    let primary_role = Role::parse(query.primary_role.as_str());
    let team_role = query
        .team_role
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(TeamRole::parse);

    Json(TeamPermissionsResponse {
        permissions: get_team_permissions(primary_role, team_role)
            .into_iter()
            .map(|permission| permission.as_str().to_owned())
            .collect(),
    })
}

pub async fn member_visibility_handler(
    State(state): State<AppState>,
    Path(target_member_id): Path<String>,
    Query(query): Query<MemberVisibilityQuery>,
) -> ApiResult<Json<MemberVisibilityResponse>> {
    let target_member_id = MemberId::new(target_member_id)?;
    let viewer_member_id = MemberId::new(query.viewer_member_id)?;

    let can_view = state
        .team_access_service
        .can_view_member_data(
            Role::parse(query.viewer_role.as_str()),
            &viewer_member_id,
            &target_member_id,
        )
        .await?;

    Ok(Json(MemberVisibilityResponse { can_view }))
}

pub async fn manager_relation_handler(
    State(state): State<AppState>,
    Path((manager_id, subordinate_id)): Path<(String, String)>,
) -> ApiResult<Json<ManagerRelationResponse>> {
    let manager_id = MemberId::new(manager_id)?;
    let subordinate_id = MemberId::new(subordinate_id)?;

    let is_manager = state
        .team_access_service
        .is_manager_of(Some(&manager_id), Some(&subordinate_id))
        .await?;

    Ok(Json(ManagerRelationResponse { is_manager }))
}
