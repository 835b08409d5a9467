pub mod sqlx_add_on_purchase_repository_impl;
pub mod sqlx_seat_assignment_repository_impl;
pub mod sqlx_seat_eligibility_repository_impl;
