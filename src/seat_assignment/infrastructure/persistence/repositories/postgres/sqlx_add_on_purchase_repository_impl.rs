use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::seat_assignment::{
    domain::model::{
        entities::add_on_purchase::AddOnPurchase,
        enums::seat_assignment_domain_error::SeatAssignmentDomainError,
        value_objects::add_on_purchase_id::AddOnPurchaseId,
    },
    infrastructure::persistence::repositories::add_on_purchase_repository::AddOnPurchaseRepository,
};

pub struct SqlxAddOnPurchaseRepositoryImpl {
    pool: PgPool,
}

impl SqlxAddOnPurchaseRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddOnPurchaseRepository for SqlxAddOnPurchaseRepositoryImpl {
    async fn find_by_id(
        &self,
        id: AddOnPurchaseId,
    ) -> Result<Option<AddOnPurchase>, SeatAssignmentDomainError> {
        let statement = r#"
            SELECT id, add_on, namespace_id, quantity
            FROM add_on_purchases
            WHERE id = $1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(|row| row_to_entity(&row)).transpose()
    }
}

fn row_to_entity(row: &PgRow) -> Result<AddOnPurchase, SeatAssignmentDomainError> {
    let id: i64 = row.try_get("id").map_err(map_infra_error)?;
    let add_on: String = row.try_get("add_on").map_err(map_infra_error)?;
    let namespace_id: Option<i64> = row.try_get("namespace_id").map_err(map_infra_error)?;
    let quantity: i64 = row.try_get("quantity").map_err(map_infra_error)?;

    Ok(AddOnPurchase::new(
        AddOnPurchaseId::new(id)?,
        add_on.parse()?,
        namespace_id,
        quantity,
    ))
}

fn map_infra_error(error: sqlx::Error) -> SeatAssignmentDomainError {
    SeatAssignmentDomainError::InfrastructureError(error.to_string())
}
