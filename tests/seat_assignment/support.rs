#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/harness.rs"]
mod harness;

pub use harness::{
    DUO_PURCHASE_ID, PRODUCT_ANALYTICS_PURCHASE_ID, SINGLE_SEAT_PURCHASE_ID, SeatHarness,
    create_seat_harness,
};
