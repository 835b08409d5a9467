use async_trait::async_trait;
use sqlx::PgPool;

use crate::seat_assignment::{
    domain::model::{
        entities::add_on_purchase::AddOnPurchase,
        enums::seat_assignment_domain_error::SeatAssignmentDomainError,
        value_objects::add_on_purchase_id::AddOnPurchaseId,
    },
    infrastructure::persistence::repositories::seat_assignment_repository::SeatAssignmentRepository,
};

pub struct SqlxSeatAssignmentRepositoryImpl {
    pool: PgPool,
}

impl SqlxSeatAssignmentRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeatAssignmentRepository for SqlxSeatAssignmentRepositoryImpl {
    async fn assigned_user_ids(
        &self,
        purchase_id: AddOnPurchaseId,
    ) -> Result<Vec<i64>, SeatAssignmentDomainError> {
        let statement = r#"
            SELECT user_id
            FROM user_add_on_assignments
            WHERE add_on_purchase_id = $1
            ORDER BY user_id
        "#;

        sqlx::query_scalar::<_, i64>(statement)
            .bind(purchase_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)
    }

    async fn insert_assignments(
        &self,
        purchase: &AddOnPurchase,
        user_ids: &[i64],
    ) -> Result<(), SeatAssignmentDomainError> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(map_infra_error)?;

        let quantity = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT quantity
            FROM add_on_purchases
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(purchase.id().value())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_infra_error)?
        .ok_or(SeatAssignmentDomainError::AddOnPurchaseNotFound)?;

        let assigned = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM user_add_on_assignments
            WHERE add_on_purchase_id = $1
            "#,
        )
        .bind(purchase.id().value())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_infra_error)?;

        let pending = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM UNNEST($2::BIGINT[]) AS requested(user_id)
            WHERE NOT EXISTS (
                SELECT 1
                FROM user_add_on_assignments
                WHERE add_on_purchase_id = $1 AND user_id = requested.user_id
            )
            "#,
        )
        .bind(purchase.id().value())
        .bind(user_ids)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_infra_error)?;

        if assigned + pending > quantity {
            return Err(SeatAssignmentDomainError::NotEnoughSeats);
        }

        sqlx::query(
            r#"
            INSERT INTO user_add_on_assignments (add_on_purchase_id, user_id, created_at)
            SELECT $1, requested.user_id, NOW()
            FROM UNNEST($2::BIGINT[]) AS requested(user_id)
            ON CONFLICT (add_on_purchase_id, user_id) DO NOTHING
            "#,
        )
        .bind(purchase.id().value())
        .bind(user_ids)
        .execute(&mut *tx)
        .await
        .map_err(map_infra_error)?;

        tx.commit().await.map_err(map_infra_error)?;
        Ok(())
    }

    async fn delete_assignments(
        &self,
        purchase_id: AddOnPurchaseId,
        user_ids: &[i64],
    ) -> Result<Vec<i64>, SeatAssignmentDomainError> {
        let statement = r#"
            DELETE FROM user_add_on_assignments
            WHERE add_on_purchase_id = $1 AND user_id = ANY($2)
            RETURNING user_id
        "#;

        let mut removed = sqlx::query_scalar::<_, i64>(statement)
            .bind(purchase_id.value())
            .bind(user_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        removed.sort_unstable();
        Ok(removed)
    }
}

fn map_infra_error(error: sqlx::Error) -> SeatAssignmentDomainError {
    SeatAssignmentDomainError::InfrastructureError(error.to_string())
}
