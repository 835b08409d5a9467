use crate::seat_assignment::domain::model::entities::add_on_purchase::AddOnPurchase;

#[derive(Clone, Debug, PartialEq)]
pub struct SeatUsage {
    pub purchase: AddOnPurchase,
    pub assigned_user_ids: Vec<i64>,
}

impl SeatUsage {
    pub fn assigned_count(&self) -> usize {
        self.assigned_user_ids.len()
    }

    pub fn available(&self) -> i64 {
        (self.purchase.quantity() - self.assigned_count() as i64).max(0)
    }
}
