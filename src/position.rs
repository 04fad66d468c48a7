// 2.0: position snapshot as supplied by the position-tracking collaborator.
// read-only per evaluation. the lens never opens, sizes or closes positions,
// it only reflects them on the chart.

use crate::types::{Leverage, Price, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    pub entry_price: Price,
    pub leverage: Leverage,
    pub side: Side,
    pub is_open: bool,
}

impl PositionSnapshot {
    pub fn open(entry_price: Price, leverage: Leverage, side: Side) -> Self {
        Self {
            entry_price,
            leverage,
            side,
            is_open: true,
        }
    }

    pub fn closed(entry_price: Price, leverage: Leverage, side: Side) -> Self {
        Self {
            entry_price,
            leverage,
            side,
            is_open: false,
        }
    }

    // 2.1: leveraged return on equity at a mark price.
    // sign * (mark - entry) / entry * leverage. -1 = equity wiped out, +1 = doubled.
    pub fn pnl_fraction(&self, mark: Price) -> Decimal {
        let price_move = (mark.value() - self.entry_price.value()) / self.entry_price.value();
        self.side.sign() * price_move * self.leverage.value()
    }

    pub fn is_underwater(&self, mark: Price) -> bool {
        self.pnl_fraction(mark) < Decimal::ZERO
    }
}
