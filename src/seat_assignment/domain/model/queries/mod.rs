pub mod seat_usage_query;
