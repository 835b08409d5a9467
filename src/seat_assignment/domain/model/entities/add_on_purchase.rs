use crate::seat_assignment::domain::model::{
    enums::add_on_name::AddOnName, value_objects::add_on_purchase_id::AddOnPurchaseId,
};

/// A purchased add-on with a fixed number of seats.
#[derive(Clone, Debug, PartialEq)]
pub struct AddOnPurchase {
    id: AddOnPurchaseId,
    add_on: AddOnName,
    namespace_id: Option<i64>,
    quantity: i64,
}

impl AddOnPurchase {
    pub fn new(
        id: AddOnPurchaseId,
        add_on: AddOnName,
        namespace_id: Option<i64>,
        quantity: i64,
    ) -> Self {
        Self {
            id,
            add_on,
            namespace_id,
            quantity: quantity.max(0),
        }
    }

    /// Whether `assigned + additional` still fits in the purchased quantity.
    pub fn has_capacity_for(&self, assigned: usize, additional: usize) -> bool {
        (assigned + additional) as i64 <= self.quantity
    }

    pub fn id(&self) -> AddOnPurchaseId {
        self.id
    }
    pub fn add_on(&self) -> AddOnName {
        self.add_on
    }
    /// `None` for a self-managed purchase.
    pub fn namespace_id(&self) -> Option<i64> {
        self.namespace_id
    }
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}
