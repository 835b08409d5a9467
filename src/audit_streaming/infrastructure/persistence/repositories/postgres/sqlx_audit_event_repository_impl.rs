use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{PgPool, Row};

use crate::audit_streaming::{
    domain::model::{
        entities::audit_event::{AuditEvent, AuditEventParts},
        enums::{
            audit_event_model_class::AuditEventModelClass,
            audit_event_scope::AuditEventScope,
            audit_streaming_domain_error::AuditStreamingDomainError,
        },
        value_objects::{audit_event_id::AuditEventId, event_type_name::EventTypeName},
    },
    infrastructure::persistence::repositories::audit_event_repository::AuditEventRepository,
};

pub struct SqlxAuditEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxAuditEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<AuditEvent, AuditStreamingDomainError> {
        let id: i64 = row.try_get("id").map_err(map_infra_error)?;
        let entity_type: String = row.try_get("entity_type").map_err(map_infra_error)?;
        let entity_id: Option<i64> = row.try_get("entity_id").map_err(map_infra_error)?;
        let details: Value = row.try_get("details").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        AuditEvent::restore(
            AuditEventId::Persisted(id),
            AuditEventParts {
                scope: AuditEventScope::from_entity(&entity_type, entity_id)?,
                author_id: row.try_get("author_id").map_err(map_infra_error)?,
                author_name: row.try_get("author_name").map_err(map_infra_error)?,
                entity_path: row.try_get("entity_path").map_err(map_infra_error)?,
                target_id: row.try_get("target_id").map_err(map_infra_error)?,
                target_type: row.try_get("target_type").map_err(map_infra_error)?,
                target_details: row.try_get("target_details").map_err(map_infra_error)?,
                ip_address: row.try_get("ip_address").map_err(map_infra_error)?,
                details,
                created_at,
            },
        )
    }
}

#[async_trait]
impl AuditEventRepository for SqlxAuditEventRepositoryImpl {
    async fn save(
        &self,
        event: &AuditEvent,
        event_type: &EventTypeName,
    ) -> Result<i64, AuditStreamingDomainError> {
        let statement = r#"
            INSERT INTO audit_events (
                event_name, entity_type, entity_id, author_id, author_name, entity_path,
                target_id, target_type, target_details, ip_address, details, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
        "#;

        sqlx::query_scalar::<_, i64>(statement)
            .bind(event_type.value())
            .bind(event.scope().entity_type())
            .bind(event.scope().entity_id())
            .bind(event.author_id())
            .bind(event.author_name())
            .bind(event.entity_path())
            .bind(event.target_id())
            .bind(event.target_type())
            .bind(event.target_details())
            .bind(event.ip_address())
            .bind(event.details())
            .bind(event.created_at())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)
    }

    async fn find_by_id(
        &self,
        model_class: AuditEventModelClass,
        audit_event_id: i64,
    ) -> Result<Option<AuditEvent>, AuditStreamingDomainError> {
        let statement = r#"
            SELECT id, entity_type, entity_id, author_id, author_name, entity_path,
                   target_id, target_type, target_details, ip_address, details, created_at
            FROM audit_events
            WHERE id = $1
              AND ($2::TEXT IS NULL OR entity_type = $2)
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(audit_event_id)
            .bind(model_class.required_entity_type())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }
}

fn map_infra_error(error: sqlx::Error) -> AuditStreamingDomainError {
    AuditStreamingDomainError::InfrastructureError(error.to_string())
}
