//! Response views
//!
//! Orders decorated with derived figures. Views are built from a store
//! snapshot; totals in one response always come from the same snapshot.

use serde::Serialize;
use shared::models::{Order, OrderId};

use crate::pricing::{calc_price, complete_price, format_price};

/// Order plus its price
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    /// Total in cents
    pub total: i64,
    /// Total formatted with two decimals
    pub price: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let total = calc_price(order);
        Self {
            order: order.clone(),
            total,
            price: format_price(total),
        }
    }
}

/// One row of the admin overview
#[derive(Debug, Clone, Serialize)]
pub struct AdminOrderRow {
    pub id: OrderId,
    pub name: String,
    /// `Name(size, extra, ...)` per line
    pub items: String,
    pub price: String,
    pub is_paid: bool,
}

impl From<&Order> for AdminOrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            name: order.name.clone(),
            items: order.items_summary(),
            price: format_price(calc_price(order)),
            is_paid: order.is_paid,
        }
    }
}

/// Admin overview (`GET /admin<secret>`)
#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub orders: Vec<AdminOrderRow>,
    pub paid_count: usize,
    /// Sum over all listed orders, in cents
    pub complete_total: i64,
    pub complete_price: String,
}

impl AdminOverview {
    pub fn from_snapshot(orders: &[Order]) -> Self {
        let complete_total = complete_price(orders);
        Self {
            orders: orders.iter().map(AdminOrderRow::from).collect(),
            paid_count: orders.iter().filter(|o| o.is_paid).count(),
            complete_total,
            complete_price: format_price(complete_total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ExtraOption, OrderDraft, OrderLine, SizeOption, SizeTier};

    fn order(id: u64, paid: bool) -> Order {
        let mut order = Order::from_draft(
            OrderId::from(id),
            OrderDraft {
                name: "Anna".into(),
                items: vec![OrderLine {
                    name: "Pizza Hawaii".into(),
                    size: SizeOption::new("groß, 32 cm", 860, SizeTier::Medium),
                    extras: vec![ExtraOption::new("Mais", 50)],
                }],
            },
            0,
        );
        order.is_paid = paid;
        order
    }

    #[test]
    fn test_order_view_flattens_order() {
        let view = OrderView::from(&order(1, false));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "Anna");
        assert_eq!(json["total"], 920);
        assert_eq!(json["price"], "9.20");
    }

    #[test]
    fn test_admin_overview() {
        let overview = AdminOverview::from_snapshot(&[order(1, true), order(2, false)]);
        assert_eq!(overview.orders.len(), 2);
        assert_eq!(overview.paid_count, 1);
        assert_eq!(overview.complete_total, 1840);
        assert_eq!(overview.complete_price, "18.40");
        assert_eq!(overview.orders[0].items, "Pizza Hawaii(groß, 32 cm, Mais)");
    }
}
