use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use jrclaw_core::{AppError, AppResult};
use jrclaw_domain::{MemberId, Role, TeamMember, TeamPermission, TeamRole};
use tokio::sync::Mutex;

use crate::TeamMemberRepository;

use super::TeamAccessService;

fn member_id(value: &str) -> MemberId {
    MemberId::new(value).unwrap_or_else(|_| panic!("invalid member id '{value}'"))
}

#[derive(Default)]
struct FakeTeamMemberRepository {
    members: HashMap<MemberId, TeamMember>,
    lookups: Mutex<Vec<MemberId>>,
}

impl FakeTeamMemberRepository {
    fn with_members(members: Vec<TeamMember>) -> Self {
        Self {
            members: members
                .into_iter()
                .map(|member| (member.id().clone(), member))
                .collect(),
            lookups: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TeamMemberRepository for FakeTeamMemberRepository {
    async fn find_team_member_by_id(
        &self,
        member_id: &MemberId,
    ) -> AppResult<Option<TeamMember>> {
        self.lookups.lock().await.push(member_id.clone());
        Ok(self.members.get(member_id).cloned())
    }
}

struct FailingTeamMemberRepository;

#[async_trait]
impl TeamMemberRepository for FailingTeamMemberRepository {
    async fn find_team_member_by_id(
        &self,
        _member_id: &MemberId,
    ) -> AppResult<Option<TeamMember>> {
        Err(AppError::Unavailable("team store offline".to_owned()))
    }
}

/// A (senior) manages B (senior), B manages C (junior); D is a paralegal under A.
fn chain_repository() -> Arc<FakeTeamMemberRepository> {
    Arc::new(FakeTeamMemberRepository::with_members(vec![
        TeamMember::new(member_id("a"), TeamRole::AdvogadoSenior, None),
        TeamMember::new(
            member_id("b"),
            TeamRole::AdvogadoSenior,
            Some(member_id("a")),
        ),
        TeamMember::new(
            member_id("c"),
            TeamRole::AdvogadoJunior,
            Some(member_id("b")),
        ),
        TeamMember::new(member_id("d"), TeamRole::Paralegal, Some(member_id("a"))),
    ]))
}

#[tokio::test]
async fn direct_manager_is_recognised() {
    let service = TeamAccessService::new(chain_repository());

    let result = service
        .is_manager_of(Some(&member_id("a")), Some(&member_id("b")))
        .await;
    assert!(matches!(result, Ok(true)));
}

#[tokio::test]
async fn manager_relationship_is_not_transitive() {
    let service = TeamAccessService::new(chain_repository());

    let result = service
        .is_manager_of(Some(&member_id("a")), Some(&member_id("c")))
        .await;
    assert!(matches!(result, Ok(false)));
}

#[tokio::test]
async fn missing_or_equal_ids_are_not_managed_and_skip_the_store() {
    let repository = chain_repository();
    let service = TeamAccessService::new(repository.clone());
    let a = member_id("a");

    assert!(matches!(service.is_manager_of(None, Some(&a)).await, Ok(false)));
    assert!(matches!(service.is_manager_of(Some(&a), None).await, Ok(false)));
    assert!(matches!(
        service.is_manager_of(Some(&a), Some(&a)).await,
        Ok(false)
    ));
    assert!(repository.lookups.lock().await.is_empty());
}

#[tokio::test]
async fn absent_subordinate_is_not_managed() {
    let service = TeamAccessService::new(chain_repository());

    let result = service
        .is_manager_of(Some(&member_id("a")), Some(&member_id("ghost")))
        .await;
    assert!(matches!(result, Ok(false)));
}

#[tokio::test]
async fn leadership_views_everyone_without_store_reads() {
    let repository = chain_repository();
    let service = TeamAccessService::new(repository.clone());

    for role in [Role::Admin, Role::Socio] {
        let result = service
            .can_view_member_data(role, &member_id("c"), &member_id("a"))
            .await;
        assert!(matches!(result, Ok(true)));
    }
    assert!(repository.lookups.lock().await.is_empty());
}

#[tokio::test]
async fn members_can_always_view_themselves() {
    let service = TeamAccessService::new(chain_repository());

    for role in [Role::Estagiario, Role::Advogado, Role::Unknown] {
        let result = service
            .can_view_member_data(role, &member_id("ghost"), &member_id("ghost"))
            .await;
        assert!(matches!(result, Ok(true)));
    }
}

#[tokio::test]
async fn senior_lawyer_views_direct_reports_only() {
    let repository = chain_repository();
    let service = TeamAccessService::new(repository.clone());

    let direct = service
        .can_view_member_data(Role::Advogado, &member_id("b"), &member_id("c"))
        .await;
    assert!(matches!(direct, Ok(true)));
    assert_eq!(
        *repository.lookups.lock().await,
        vec![member_id("b"), member_id("c")]
    );

    let indirect = service
        .can_view_member_data(Role::Advogado, &member_id("a"), &member_id("c"))
        .await;
    assert!(matches!(indirect, Ok(false)));
}

#[tokio::test]
async fn non_supervising_lawyer_is_denied_even_as_manager() {
    let repository = Arc::new(FakeTeamMemberRepository::with_members(vec![
        TeamMember::new(member_id("p"), TeamRole::AdvogadoPleno, None),
        TeamMember::new(member_id("j"), TeamRole::AdvogadoJunior, Some(member_id("p"))),
    ]));
    let service = TeamAccessService::new(repository.clone());

    let result = service
        .can_view_member_data(Role::Advogado, &member_id("p"), &member_id("j"))
        .await;
    assert!(matches!(result, Ok(false)));
    assert_eq!(*repository.lookups.lock().await, vec![member_id("p")]);
}

#[tokio::test]
async fn interns_cannot_view_others_even_with_senior_team_role() {
    let service = TeamAccessService::new(chain_repository());

    let result = service
        .can_view_member_data(Role::Estagiario, &member_id("a"), &member_id("b"))
        .await;
    assert!(matches!(result, Ok(false)));
}

#[tokio::test]
async fn unknown_viewer_record_is_denied() {
    let service = TeamAccessService::new(chain_repository());

    let result = service
        .can_view_member_data(Role::Advogado, &member_id("ghost"), &member_id("c"))
        .await;
    assert!(matches!(result, Ok(false)));
}

#[tokio::test]
async fn store_failures_propagate() {
    let service = TeamAccessService::new(Arc::new(FailingTeamMemberRepository));

    let result = service
        .can_view_member_data(Role::Advogado, &member_id("a"), &member_id("b"))
        .await;
    assert!(matches!(result, Err(AppError::Unavailable(_))));
}

#[tokio::test]
async fn member_permissions_use_stored_team_role() {
    let service = TeamAccessService::new(chain_repository());

    let paralegal = service
        .team_permissions_for_member(Role::Advogado, &member_id("d"))
        .await;
    assert_eq!(paralegal.map(|permissions| permissions.len()).ok(), Some(5));

    let senior = service
        .team_permissions_for_member(Role::Advogado, &member_id("a"))
        .await;
    assert_eq!(senior.map(|permissions| permissions.len()).ok(), Some(12));

    let unregistered = service
        .team_permissions_for_member(Role::Advogado, &member_id("ghost"))
        .await;
    assert_eq!(unregistered.map(|permissions| permissions.len()).ok(), Some(6));
}

#[tokio::test]
async fn require_team_permission_reports_forbidden() {
    let service = TeamAccessService::new(chain_repository());

    let allowed = service
        .require_team_permission(
            Role::Advogado,
            &member_id("b"),
            TeamPermission::ViewWellbeingDashboard,
        )
        .await;
    assert!(allowed.is_ok());

    let denied = service
        .require_team_permission(
            Role::Advogado,
            &member_id("c"),
            TeamPermission::ViewWellbeingDashboard,
        )
        .await;
    assert!(matches!(denied, Err(AppError::Forbidden(_))));
}
