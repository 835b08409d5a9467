pub mod add_on_purchase_repository;
pub mod postgres;
pub mod seat_assignment_repository;
pub mod seat_eligibility_repository;
