pub mod add_on_purchase_lock_registry;
