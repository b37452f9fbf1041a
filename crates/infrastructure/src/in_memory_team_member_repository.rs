use std::collections::HashMap;

use async_trait::async_trait;
use jrclaw_application::TeamMemberRepository;
use jrclaw_core::{AppError, AppResult};
use jrclaw_domain::{MemberId, TeamMember};
use tokio::sync::RwLock;

/// In-memory team member repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryTeamMemberRepository {
    members: RwLock<HashMap<MemberId, TeamMember>>,
}

impl InMemoryTeamMemberRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a member, rejecting duplicates and self-managed records.
    pub async fn insert(&self, member: TeamMember) -> AppResult<()> {
        if member.manager_id() == Some(member.id()) {
            return Err(AppError::Validation(format!(
                "member '{}' cannot manage itself",
                member.id()
            )));
        }

        let mut members = self.members.write().await;
        if members.contains_key(member.id()) {
            return Err(AppError::Conflict(format!(
                "member '{}' already exists",
                member.id()
            )));
        }

        members.insert(member.id().clone(), member);
        Ok(())
    }
}

#[async_trait]
impl TeamMemberRepository for InMemoryTeamMemberRepository {
    async fn find_team_member_by_id(
        &self,
        member_id: &MemberId,
    ) -> AppResult<Option<TeamMember>> {
        Ok(self.members.read().await.get(member_id).cloned())
    }
}
