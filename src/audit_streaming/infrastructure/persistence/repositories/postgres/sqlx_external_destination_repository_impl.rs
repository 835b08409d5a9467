use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::audit_streaming::{
    domain::model::{
        entities::{
            external_destination::{ExternalDestination, ExternalDestinationParts},
            streaming_header::StreamingHeader,
        },
        enums::{
            audit_streaming_domain_error::AuditStreamingDomainError,
            destination_level::DestinationLevel,
        },
        value_objects::{
            destination_id::DestinationId, destination_name::DestinationName,
            destination_url::DestinationUrl, event_type_name::EventTypeName,
            namespace_filter::NamespaceFilter, verification_token::VerificationToken,
        },
    },
    infrastructure::persistence::repositories::external_destination_repository::ExternalDestinationRepository,
};

const SELECT_DESTINATIONS: &str = r#"
    SELECT id, level, group_id, name, destination_url, verification_token, active,
           namespace_filter_type, namespace_filter_id, created_at
    FROM external_audit_destinations
"#;

#[derive(Default)]
struct DestinationChildren {
    headers: Vec<StreamingHeader>,
    event_type_filters: BTreeSet<EventTypeName>,
}

pub struct SqlxExternalDestinationRepositoryImpl {
    pool: PgPool,
}

impl SqlxExternalDestinationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_children(
        &self,
        destination_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, DestinationChildren>, AuditStreamingDomainError> {
        let mut children: HashMap<Uuid, DestinationChildren> = HashMap::new();
        if destination_ids.is_empty() {
            return Ok(children);
        }

        let header_rows = sqlx::query(
            r#"
            SELECT destination_id, key, value, active
            FROM audit_destination_headers
            WHERE destination_id = ANY($1)
            ORDER BY destination_id, position
            "#,
        )
        .bind(destination_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_infra_error)?;

        for row in header_rows {
            let destination_id: Uuid = row.try_get("destination_id").map_err(map_infra_error)?;
            let header = StreamingHeader::new(
                row.try_get("key").map_err(map_infra_error)?,
                row.try_get("value").map_err(map_infra_error)?,
                row.try_get("active").map_err(map_infra_error)?,
            )?;
            children
                .entry(destination_id)
                .or_default()
                .headers
                .push(header);
        }

        let filter_rows = sqlx::query(
            r#"
            SELECT destination_id, audit_event_type
            FROM audit_destination_event_type_filters
            WHERE destination_id = ANY($1)
            "#,
        )
        .bind(destination_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_infra_error)?;

        for row in filter_rows {
            let destination_id: Uuid = row.try_get("destination_id").map_err(map_infra_error)?;
            let event_type =
                EventTypeName::new(row.try_get("audit_event_type").map_err(map_infra_error)?)?;
            children
                .entry(destination_id)
                .or_default()
                .event_type_filters
                .insert(event_type);
        }

        Ok(children)
    }

    async fn rows_to_entities(
        &self,
        rows: Vec<sqlx::postgres::PgRow>,
    ) -> Result<Vec<ExternalDestination>, AuditStreamingDomainError> {
        let ids = rows
            .iter()
            .map(|row| row.try_get::<Uuid, _>("id").map_err(map_infra_error))
            .collect::<Result<Vec<_>, _>>()?;
        let mut children = self.load_children(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
                Self::row_to_entity(row, children.remove(&id).unwrap_or_default())
            })
            .collect()
    }

    fn row_to_entity(
        row: sqlx::postgres::PgRow,
        children: DestinationChildren,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let level_raw: String = row.try_get("level").map_err(map_infra_error)?;
        let group_id: Option<i64> = row.try_get("group_id").map_err(map_infra_error)?;
        let filter_type: Option<String> =
            row.try_get("namespace_filter_type").map_err(map_infra_error)?;
        let filter_id: Option<i64> = row.try_get("namespace_filter_id").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        let level = match (level_raw.as_str(), group_id) {
            ("instance", None) => DestinationLevel::Instance,
            ("group", Some(group_id)) => DestinationLevel::Group(group_id),
            _ => {
                return Err(AuditStreamingDomainError::InfrastructureError(
                    "unknown destination level stored".to_string(),
                ));
            }
        };

        let namespace_filter = match (filter_type.as_deref(), filter_id) {
            (None, _) => None,
            (Some("group"), Some(id)) => Some(NamespaceFilter::Group(id)),
            (Some("project"), Some(id)) => Some(NamespaceFilter::Project(id)),
            _ => {
                return Err(AuditStreamingDomainError::InfrastructureError(
                    "unknown namespace filter stored".to_string(),
                ));
            }
        };

        ExternalDestination::restore(ExternalDestinationParts {
            id: DestinationId::new(id),
            level,
            name: DestinationName::new(row.try_get("name").map_err(map_infra_error)?)?,
            destination_url: DestinationUrl::new(
                row.try_get("destination_url").map_err(map_infra_error)?,
            )?,
            verification_token: VerificationToken::new(
                row.try_get("verification_token").map_err(map_infra_error)?,
            )?,
            active: row.try_get("active").map_err(map_infra_error)?,
            headers: children.headers,
            event_type_filters: children.event_type_filters,
            namespace_filter,
            created_at,
        })
    }
}

#[async_trait]
impl ExternalDestinationRepository for SqlxExternalDestinationRepositoryImpl {
    async fn save(
        &self,
        destination: &ExternalDestination,
    ) -> Result<(), AuditStreamingDomainError> {
        let mut tx = self.pool.begin().await.map_err(map_infra_error)?;
        let destination_id = destination.id().value();

        let statement = r#"
            INSERT INTO external_audit_destinations (
                id, level, group_id, name, destination_url, verification_token, active,
                namespace_filter_type, namespace_filter_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id)
            DO UPDATE SET
                name = EXCLUDED.name,
                destination_url = EXCLUDED.destination_url,
                active = EXCLUDED.active,
                namespace_filter_type = EXCLUDED.namespace_filter_type,
                namespace_filter_id = EXCLUDED.namespace_filter_id
        "#;

        let namespace_filter = destination.namespace_filter();
        sqlx::query(statement)
            .bind(destination_id)
            .bind(destination.level().as_str())
            .bind(destination.level().group_id())
            .bind(destination.name().value())
            .bind(destination.destination_url().value())
            .bind(destination.verification_token().value())
            .bind(destination.active())
            .bind(namespace_filter.map(|filter| filter.namespace_type()))
            .bind(namespace_filter.map(|filter| filter.namespace_id()))
            .bind(destination.created_at())
            .execute(&mut *tx)
            .await
            .map_err(map_infra_error)?;

        sqlx::query("DELETE FROM audit_destination_headers WHERE destination_id = $1")
            .bind(destination_id)
            .execute(&mut *tx)
            .await
            .map_err(map_infra_error)?;

        for (position, header) in destination.headers().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO audit_destination_headers (destination_id, position, key, value, active)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(destination_id)
            .bind(position as i32)
            .bind(header.key())
            .bind(header.value())
            .bind(header.active())
            .execute(&mut *tx)
            .await
            .map_err(map_infra_error)?;
        }

        sqlx::query("DELETE FROM audit_destination_event_type_filters WHERE destination_id = $1")
            .bind(destination_id)
            .execute(&mut *tx)
            .await
            .map_err(map_infra_error)?;

        for event_type in destination.event_type_filters() {
            sqlx::query(
                r#"
                INSERT INTO audit_destination_event_type_filters (destination_id, audit_event_type)
                VALUES ($1, $2)
                "#,
            )
            .bind(destination_id)
            .bind(event_type.value())
            .execute(&mut *tx)
            .await
            .map_err(map_infra_error)?;
        }

        tx.commit().await.map_err(map_infra_error)?;
        Ok(())
    }

    async fn delete(&self, destination_id: DestinationId) -> Result<bool, AuditStreamingDomainError> {
        let result = sqlx::query("DELETE FROM external_audit_destinations WHERE id = $1")
            .bind(destination_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(
        &self,
        destination_id: DestinationId,
    ) -> Result<Option<ExternalDestination>, AuditStreamingDomainError> {
        let statement = format!("{SELECT_DESTINATIONS} WHERE id = $1");

        let rows = sqlx::query(&statement)
            .bind(destination_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(self.rows_to_entities(rows).await?.into_iter().next())
    }

    async fn list_by_level(
        &self,
        level: DestinationLevel,
    ) -> Result<Vec<ExternalDestination>, AuditStreamingDomainError> {
        let statement = format!(
            "{SELECT_DESTINATIONS} WHERE level = $1 AND group_id IS NOT DISTINCT FROM $2 ORDER BY created_at, id"
        );

        let rows = sqlx::query(&statement)
            .bind(level.as_str())
            .bind(level.group_id())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        self.rows_to_entities(rows).await
    }
}

fn map_infra_error(error: sqlx::Error) -> AuditStreamingDomainError {
    AuditStreamingDomainError::InfrastructureError(error.to_string())
}
