use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::audit_streaming::{
    domain::model::enums::audit_streaming_domain_error::AuditStreamingDomainError,
    infrastructure::persistence::repositories::namespace_repository::NamespaceRepository,
};

const NAMESPACE_CHAIN_STATEMENT: &str = r#"
    WITH RECURSIVE chain AS (
        SELECT id, parent_id, type, 0 AS depth
        FROM namespaces
        WHERE id = $1
        UNION ALL
        SELECT parent.id, parent.parent_id, parent.type, chain.depth + 1
        FROM namespaces parent
        JOIN chain ON parent.id = chain.parent_id
    )
    SELECT id, type
    FROM chain
    ORDER BY depth
"#;

pub struct SqlxNamespaceRepositoryImpl {
    pool: PgPool,
}

impl SqlxNamespaceRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns `(id, type)` pairs from `namespace_id` up to its root.
    async fn namespace_chain(
        &self,
        namespace_id: i64,
    ) -> Result<Vec<(i64, String)>, AuditStreamingDomainError> {
        let rows = sqlx::query(NAMESPACE_CHAIN_STATEMENT)
            .bind(namespace_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter()
            .map(|row| {
                let id: i64 = row.try_get("id").map_err(map_infra_error)?;
                let namespace_type: String = row.try_get("type").map_err(map_infra_error)?;
                Ok((id, namespace_type))
            })
            .collect()
    }
}

#[async_trait]
impl NamespaceRepository for SqlxNamespaceRepositoryImpl {
    async fn find_group_ancestry(
        &self,
        group_id: i64,
    ) -> Result<Option<Vec<i64>>, AuditStreamingDomainError> {
        let chain = self.namespace_chain(group_id).await?;

        match chain.first() {
            Some((_, namespace_type)) if namespace_type == "Group" => {
                Ok(Some(chain.into_iter().map(|(id, _)| id).collect()))
            }
            _ => Ok(None),
        }
    }

    async fn find_project_group_ancestry(
        &self,
        project_id: i64,
    ) -> Result<Option<Vec<i64>>, AuditStreamingDomainError> {
        let statement = r#"
            SELECT namespace_id
            FROM projects
            WHERE id = $1
        "#;

        let maybe_namespace_id = sqlx::query_scalar::<_, i64>(statement)
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        let Some(namespace_id) = maybe_namespace_id else {
            return Ok(None);
        };

        let groups = self
            .namespace_chain(namespace_id)
            .await?
            .into_iter()
            .filter(|(_, namespace_type)| namespace_type == "Group")
            .map(|(id, _)| id)
            .collect();

        Ok(Some(groups))
    }
}

fn map_infra_error(error: sqlx::Error) -> AuditStreamingDomainError {
    AuditStreamingDomainError::InfrastructureError(error.to_string())
}
