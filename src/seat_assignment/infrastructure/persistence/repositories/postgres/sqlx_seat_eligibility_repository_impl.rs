use async_trait::async_trait;
use sqlx::PgPool;

use crate::seat_assignment::{
    domain::model::{
        entities::add_on_purchase::AddOnPurchase,
        enums::seat_assignment_domain_error::SeatAssignmentDomainError,
    },
    infrastructure::persistence::repositories::seat_eligibility_repository::SeatEligibilityRepository,
};

/// Members of the purchase namespace, its subgroups and their projects.
const NAMESPACE_MEMBERS_STATEMENT: &str = r#"
    WITH RECURSIVE hierarchy AS (
        SELECT id
        FROM namespaces
        WHERE id = $1
        UNION ALL
        SELECT child.id
        FROM namespaces child
        JOIN hierarchy ON child.parent_id = hierarchy.id
    )
    SELECT DISTINCT members.user_id
    FROM members
    JOIN users ON users.id = members.user_id
    WHERE members.user_id = ANY($2)
      AND users.state = 'active'
      AND (
        (members.source_type = 'Namespace' AND members.source_id IN (SELECT id FROM hierarchy))
        OR (members.source_type = 'Project' AND members.source_id IN (
            SELECT projects.id FROM projects WHERE projects.namespace_id IN (SELECT id FROM hierarchy)
        ))
      )
"#;

/// Active human users of the instance.
const ACTIVE_HUMAN_USERS_STATEMENT: &str = r#"
    SELECT id
    FROM users
    WHERE id = ANY($1)
      AND state = 'active'
      AND user_type = 0
"#;

pub struct SqlxSeatEligibilityRepositoryImpl {
    pool: PgPool,
    gitlab_com_subscriptions: bool,
}

impl SqlxSeatEligibilityRepositoryImpl {
    pub fn new(pool: PgPool, gitlab_com_subscriptions: bool) -> Self {
        Self {
            pool,
            gitlab_com_subscriptions,
        }
    }
}

#[async_trait]
impl SeatEligibilityRepository for SqlxSeatEligibilityRepositoryImpl {
    async fn eligible_user_ids(
        &self,
        purchase: &AddOnPurchase,
        user_ids: &[i64],
    ) -> Result<Vec<i64>, SeatAssignmentDomainError> {
        let query = match (self.gitlab_com_subscriptions, purchase.namespace_id()) {
            (true, Some(namespace_id)) => sqlx::query_scalar::<_, i64>(NAMESPACE_MEMBERS_STATEMENT)
                .bind(namespace_id)
                .bind(user_ids),
            (true, None) => return Ok(Vec::new()),
            (false, _) => sqlx::query_scalar::<_, i64>(ACTIVE_HUMAN_USERS_STATEMENT).bind(user_ids),
        };

        query.fetch_all(&self.pool).await.map_err(map_infra_error)
    }
}

fn map_infra_error(error: sqlx::Error) -> SeatAssignmentDomainError {
    SeatAssignmentDomainError::InfrastructureError(error.to_string())
}
