pub mod add_on_purchase;
