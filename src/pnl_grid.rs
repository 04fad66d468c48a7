// 5.0: PnL reference grid. seven fixed equity levels mapped to the prices
// that realize them at the current leverage. overlay annotation only, the
// grid never feeds back into the viewport bounds.

use crate::types::{Leverage, Price};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

// Fixed equity fractions: -100%, -50%, -25%, 0, +25%, +50%, +100%.
pub const PNL_GRID_LEVELS: [Decimal; 7] = [
    dec!(-1),
    dec!(-0.5),
    dec!(-0.25),
    Decimal::ZERO,
    dec!(0.25),
    dec!(0.5),
    dec!(1),
];

// One grid line. price is a raw Decimal, not a Price: at leverage <= span
// the deepest loss levels land at or below zero, and those lines simply
// project off-viewport where the renderer clips them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PnlGridLine {
    pub pnl_pct: Decimal,
    pub price: Decimal,
}

// 5.1: level * span of equity is realized at anchor * (1 + level*span/leverage).
// exactly 7 lines, strictly increasing in price, middle line exactly at the anchor.
pub fn pnl_grid(anchor: Price, leverage: Leverage, span: Decimal) -> Vec<PnlGridLine> {
    PNL_GRID_LEVELS
        .iter()
        .map(|level| {
            let pnl_pct = *level * span;
            let price = anchor.value() * (Decimal::ONE + pnl_pct / leverage.value());
            PnlGridLine { pnl_pct, price }
        })
        .collect()
}
