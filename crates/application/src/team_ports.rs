use async_trait::async_trait;

use jrclaw_core::AppResult;
use jrclaw_domain::{MemberId, TeamMember};

/// Repository port for team member lookups.
#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    /// Finds the team projection of a member, if it exists.
    async fn find_team_member_by_id(
        &self,
        member_id: &MemberId,
    ) -> AppResult<Option<TeamMember>>;
}
