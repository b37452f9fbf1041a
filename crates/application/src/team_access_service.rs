use std::sync::Arc;

use jrclaw_core::{AppError, AppResult};
use jrclaw_domain::{MemberId, Role, TeamPermission, TeamRole, get_team_permissions};

use crate::TeamMemberRepository;

/// Application service for team-module visibility and permission checks.
///
/// Missing members never raise: they resolve to a denial.
#[derive(Clone)]
pub struct TeamAccessService {
    repository: Arc<dyn TeamMemberRepository>,
}

impl TeamAccessService {
    /// Creates a new team access service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn TeamMemberRepository>) -> Self {
        Self { repository }
    }

    /// Returns whether `manager_id` is the direct manager of `subordinate_id`.
    ///
    /// Only the stored single-hop edge counts; indirect reports are not managed.
    pub async fn is_manager_of(
        &self,
        manager_id: Option<&MemberId>,
        subordinate_id: Option<&MemberId>,
    ) -> AppResult<bool> {
        let (Some(manager_id), Some(subordinate_id)) = (manager_id, subordinate_id) else {
            return Ok(false);
        };

        if manager_id == subordinate_id {
            return Ok(false);
        }

        let subordinate = self
            .repository
            .find_team_member_by_id(subordinate_id)
            .await?;

        Ok(subordinate
            .as_ref()
            .and_then(|member| member.manager_id())
            .is_some_and(|stored_manager_id| stored_manager_id == manager_id))
    }

    /// Returns whether the viewer may see the target member's team data.
    pub async fn can_view_member_data(
        &self,
        viewer_role: Role,
        viewer_member_id: &MemberId,
        target_member_id: &MemberId,
    ) -> AppResult<bool> {
        if viewer_role.is_leadership() || viewer_member_id == target_member_id {
            return Ok(true);
        }

        if viewer_role != Role::Advogado {
            return Ok(false);
        }

        let viewer_team_role = self.stored_team_role(viewer_member_id).await?;
        if !viewer_team_role.is_some_and(|team_role| team_role.can_supervise()) {
            return Ok(false);
        }

        self.is_manager_of(Some(viewer_member_id), Some(target_member_id))
            .await
    }

    /// Resolves team-module permissions using the member's stored team role.
    pub async fn team_permissions_for_member(
        &self,
        primary_role: Role,
        member_id: &MemberId,
    ) -> AppResult<Vec<TeamPermission>> {
        if primary_role.is_leadership() {
            return Ok(get_team_permissions(primary_role, None));
        }

        let team_role = self.stored_team_role(member_id).await?;
        Ok(get_team_permissions(primary_role, team_role))
    }

    /// Ensures the member holds the team permission.
    pub async fn require_team_permission(
        &self,
        primary_role: Role,
        member_id: &MemberId,
        permission: TeamPermission,
    ) -> AppResult<()> {
        let permissions = self
            .team_permissions_for_member(primary_role, member_id)
            .await?;

        if permissions.contains(&permission) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "member '{member_id}' is missing team permission '{}'",
            permission.as_str()
        )))
    }

    async fn stored_team_role(&self, member_id: &MemberId) -> AppResult<Option<TeamRole>> {
        Ok(self
            .repository
            .find_team_member_by_id(member_id)
            .await?
            .map(|member| member.team_role()))
    }
}

#[cfg(test)]
mod tests;
