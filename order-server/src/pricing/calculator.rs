//! Price Calculator
//!
//! All amounts are integer cents. A line costs its size's base price plus, for
//! every extra, the extra's base price and a surcharge that depends only on the
//! size tier.

use shared::models::{ExtraOption, Order, OrderLine, SizeOption, SizeTier};

/// Surcharge added to every extra, by size tier
pub fn extra_surcharge(tier: SizeTier) -> i64 {
    match tier {
        SizeTier::Small => 0,
        SizeTier::Medium => 10,
        SizeTier::Large => 60,
        // ExtraLarge and anything unrecognised
        _ => 130,
    }
}

/// Price of one extra on a given size
pub fn extra_price(size: &SizeOption, extra: &ExtraOption) -> i64 {
    extra.price + extra_surcharge(size.tier)
}

/// Price of one order line
pub fn line_price(line: &OrderLine) -> i64 {
    line.size.price
        + line
            .extras
            .iter()
            .map(|extra| extra_price(&line.size, extra))
            .sum::<i64>()
}

/// Total of one order
pub fn calc_price(order: &Order) -> i64 {
    order.items.iter().map(line_price).sum()
}

/// Total over a snapshot of orders
pub fn complete_price(orders: &[Order]) -> i64 {
    orders.iter().map(calc_price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderDraft, OrderId};

    fn order(items: Vec<OrderLine>) -> Order {
        Order::from_draft(
            OrderId::from(1),
            OrderDraft {
                name: "Anna".into(),
                items,
            },
            0,
        )
    }

    fn line(size: SizeOption, extras: &[(&str, i64)]) -> OrderLine {
        OrderLine {
            name: "Pizza".into(),
            size,
            extras: extras
                .iter()
                .map(|(name, price)| ExtraOption::new(*name, *price))
                .collect(),
        }
    }

    #[test]
    fn test_surcharge_table() {
        assert_eq!(extra_surcharge(SizeTier::Small), 0);
        assert_eq!(extra_surcharge(SizeTier::Medium), 10);
        assert_eq!(extra_surcharge(SizeTier::Large), 60);
        assert_eq!(extra_surcharge(SizeTier::ExtraLarge), 130);
        assert_eq!(extra_surcharge(SizeTier::Other), 130);
    }

    #[test]
    fn test_small_margherita_with_basil() {
        let o = order(vec![line(
            SizeOption::new("small", 650, SizeTier::Small),
            &[("Basil", 50)],
        )]);
        assert_eq!(calc_price(&o), 700);
    }

    #[test]
    fn test_large_line_with_two_extras() {
        let large = line(
            SizeOption::new("large", 860, SizeTier::Large),
            &[("Mais", 50), ("Ananas", 50)],
        );
        assert_eq!(line_price(&large), 1080);

        let small = line(SizeOption::new("small", 650, SizeTier::Small), &[]);
        assert_eq!(calc_price(&order(vec![large, small])), 1730);
    }

    #[test]
    fn test_duplicate_extras_are_charged_each_time() {
        let l = line(
            SizeOption::new("groß, 32 cm", 800, SizeTier::Medium),
            &[("Salami", 50), ("Salami", 50)],
        );
        assert_eq!(line_price(&l), 800 + 2 * 60);
    }

    #[test]
    fn test_unknown_tier_uses_top_surcharge() {
        let l = line(SizeOption::new("?", 1000, SizeTier::Other), &[("Mais", 50)]);
        assert_eq!(line_price(&l), 1180);
    }

    #[test]
    fn test_empty_order_costs_nothing() {
        assert_eq!(calc_price(&order(vec![])), 0);
        assert_eq!(complete_price(&[]), 0);
    }

    #[test]
    fn test_complete_price_sums_orders() {
        let a = order(vec![line(SizeOption::new("s", 650, SizeTier::Small), &[])]);
        let b = order(vec![line(
            SizeOption::new("p", 1690, SizeTier::ExtraLarge),
            &[("Mais", 50)],
        )]);
        assert_eq!(complete_price(&[a.clone(), b.clone()]), 650 + 1870);
        assert_eq!(
            complete_price(&[a.clone(), b.clone()]),
            calc_price(&a) + calc_price(&b)
        );
    }
}
