use async_trait::async_trait;
use jrclaw_application::TeamMemberRepository;
use jrclaw_core::{AppError, AppResult};
use jrclaw_domain::{MemberId, TeamMember, TeamRole};
use sqlx::{FromRow, PgPool};
use tracing::warn;

/// PostgreSQL-backed team member repository.
#[derive(Clone)]
pub struct PostgresTeamMemberRepository {
    pool: PgPool,
}

impl PostgresTeamMemberRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TeamMemberRow {
    id: String,
    team_role: String,
    manager_id: Option<String>,
}

impl TeamMemberRow {
    fn into_team_member(self) -> AppResult<TeamMember> {
        let team_role = TeamRole::parse(self.team_role.as_str());
        if team_role == TeamRole::Unknown {
            warn!(
                member_id = %self.id,
                team_role = %self.team_role,
                "stored team role is not recognised"
            );
        }

        let manager_id = self
            .manager_id
            .filter(|value| !value.trim().is_empty())
            .map(MemberId::new)
            .transpose()?;

        Ok(TeamMember::new(MemberId::new(self.id)?, team_role, manager_id))
    }
}

#[async_trait]
impl TeamMemberRepository for PostgresTeamMemberRepository {
    async fn find_team_member_by_id(
        &self,
        member_id: &MemberId,
    ) -> AppResult<Option<TeamMember>> {
        let row = sqlx::query_as::<_, TeamMemberRow>(
            r#"
            SELECT id, team_role, manager_id
            FROM team_members
            WHERE id = $1
            "#,
        )
        .bind(member_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Unavailable(format!(
                "failed to find team member '{member_id}': {error}"
            ))
        })?;

        row.map(TeamMemberRow::into_team_member).transpose()
    }
}
