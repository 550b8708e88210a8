//! Ladder generation.
//!
//! Produces the ordered rungs for one burst:
//! - straddle: BUY and SELL at the chosen anchor (same price)
//! - level `i` in `0..levels`: BUY at `down - i*spread`, SELL at `up + i*spread`

use mexo_core::{OrderSide, Price};
use rust_decimal::Decimal;

use crate::anchor::AnchorPrices;

/// One order request in the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rung {
    pub side: OrderSide,
    pub price: Price,
    /// Ladder level, `None` for the straddle pair.
    pub level: Option<u32>,
}

/// Ladder shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderParams {
    pub spread: Decimal,
    pub levels: u32,
    pub straddle: bool,
}

/// Rungs for one burst, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    pub anchors: AnchorPrices,
    pub order_price: Price,
    pub rungs: Vec<Rung>,
}

impl Ladder {
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    /// Prices of the leveled rungs on `side`, innermost first.
    pub fn level_prices(&self, side: OrderSide) -> Vec<Price> {
        self.rungs
            .iter()
            .filter(|r| r.side == side && r.level.is_some())
            .map(|r| r.price)
            .collect()
    }

    /// The straddle pair, if one was emitted.
    pub fn straddle(&self) -> impl Iterator<Item = &Rung> {
        self.rungs.iter().filter(|r| r.level.is_none())
    }
}

/// Build the ladder around `anchors`, centring the straddle on `order_price`.
pub fn build_ladder(anchors: AnchorPrices, order_price: Price, params: &LadderParams) -> Ladder {
    let straddle_len = if params.straddle { 2 } else { 0 };
    let mut rungs = Vec::with_capacity(straddle_len + 2 * params.levels as usize);

    if params.straddle {
        rungs.push(Rung {
            side: OrderSide::Buy,
            price: order_price,
            level: None,
        });
        rungs.push(Rung {
            side: OrderSide::Sell,
            price: order_price,
            level: None,
        });
    }

    for level in 0..params.levels {
        let steps = i64::from(level);
        rungs.push(Rung {
            side: OrderSide::Buy,
            price: anchors.down.offset(params.spread, -steps),
            level: Some(level),
        });
        rungs.push(Rung {
            side: OrderSide::Sell,
            price: anchors.up.offset(params.spread, steps),
            level: Some(level),
        });
    }

    Ladder {
        anchors,
        order_price,
        rungs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn anchors() -> AnchorPrices {
        AnchorPrices::new(Price::new(dec!(10.02)), Price::new(dec!(10.00)))
    }

    fn params(levels: u32) -> LadderParams {
        LadderParams {
            spread: dec!(0.01),
            levels,
            straddle: true,
        }
    }

    #[test]
    fn test_three_level_prices() {
        let ladder = build_ladder(anchors(), Price::new(dec!(10.00)), &params(3));

        let buys: Vec<_> = ladder.level_prices(OrderSide::Buy).iter().map(Price::inner).collect();
        let sells: Vec<_> = ladder.level_prices(OrderSide::Sell).iter().map(Price::inner).collect();
        assert_eq!(buys, vec![dec!(10.00), dec!(9.99), dec!(9.98)]);
        assert_eq!(sells, vec![dec!(10.02), dec!(10.03), dec!(10.04)]);
    }

    #[test]
    fn test_rung_count() {
        for levels in 1..=8 {
            let ladder = build_ladder(anchors(), anchors().up, &params(levels));
            assert_eq!(ladder.len(), 2 + 2 * levels as usize);
        }
    }

    #[test]
    fn test_straddle_pair_shares_order_price() {
        let order_price = Price::new(dec!(10.02));
        let ladder = build_ladder(anchors(), order_price, &params(2));

        let straddle: Vec<_> = ladder.straddle().collect();
        assert_eq!(straddle.len(), 2);
        assert_eq!(straddle[0].side, OrderSide::Buy);
        assert_eq!(straddle[1].side, OrderSide::Sell);
        assert!(straddle.iter().all(|r| r.price == order_price));
        // straddle comes first
        assert_eq!(ladder.rungs[0].level, None);
        assert_eq!(ladder.rungs[2].level, Some(0));
    }

    #[test]
    fn test_straddle_disabled() {
        let ladder = build_ladder(
            anchors(),
            anchors().down,
            &LadderParams {
                straddle: false,
                ..params(3)
            },
        );
        assert_eq!(ladder.len(), 6);
        assert_eq!(ladder.straddle().count(), 0);
    }

    #[test]
    fn test_rungs_interleave_buy_then_sell() {
        let ladder = build_ladder(anchors(), anchors().down, &params(3));
        for pair in ladder.rungs[2..].chunks(2) {
            assert_eq!(pair[0].side, OrderSide::Buy);
            assert_eq!(pair[1].side, OrderSide::Sell);
            assert_eq!(pair[0].level, pair[1].level);
        }
    }
}
