pub mod add_on_purchase_id;
pub mod seat_usage;
