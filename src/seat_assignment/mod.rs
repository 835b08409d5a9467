use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    seat_assignment::{
        application::{
            command_services::seat_assignment_command_service_impl::SeatAssignmentCommandServiceImpl,
            query_services::seat_assignment_query_service_impl::SeatAssignmentQueryServiceImpl,
        },
        infrastructure::{
            locking::add_on_purchase_lock_registry::AddOnPurchaseLockRegistry,
            persistence::repositories::postgres::{
                sqlx_add_on_purchase_repository_impl::SqlxAddOnPurchaseRepositoryImpl,
                sqlx_seat_assignment_repository_impl::SqlxSeatAssignmentRepositoryImpl,
                sqlx_seat_eligibility_repository_impl::SqlxSeatEligibilityRepositoryImpl,
            },
        },
        interfaces::rest::controllers::seat_assignment_rest_controller::{
            SeatAssignmentRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_seat_assignment_router(config: &AppConfig, pool: PgPool) -> Result<Router, String> {
    let add_on_purchase_repository = Arc::new(SqlxAddOnPurchaseRepositoryImpl::new(pool.clone()));
    let seat_assignment_repository = Arc::new(SqlxSeatAssignmentRepositoryImpl::new(pool.clone()));
    let seat_eligibility_repository = Arc::new(SqlxSeatEligibilityRepositoryImpl::new(
        pool,
        config.gitlab_com_subscriptions,
    ));

    let command_service = Arc::new(SeatAssignmentCommandServiceImpl::new(
        add_on_purchase_repository.clone(),
        seat_assignment_repository.clone(),
        seat_eligibility_repository,
        Arc::new(AddOnPurchaseLockRegistry::new(
            config.seat_assignment_lock_timeout,
        )),
    ));
    let query_service = Arc::new(SeatAssignmentQueryServiceImpl::new(
        add_on_purchase_repository,
        seat_assignment_repository,
    ));

    Ok(router(SeatAssignmentRestControllerState {
        command_service,
        query_service,
    }))
}
