//! Client-side liquidation estimate.
//!
//! Isolated-margin approximation ignoring fees and funding: the chart needs
//! a threshold line that lands close enough to the exchange's real number to
//! be useful, not the exchange's own computation. The estimate only makes
//! sense while the position's margin fraction still covers the maintenance
//! requirement; `estimate_available` is that gate and callers must check it
//! before asking for a price.

use crate::types::{Leverage, Price, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Approximate price at which an isolated position gets liquidated.
///
/// - long: `entry * (1 - 1/leverage) / (1 - mmr)`
/// - short: `entry * (1 + 1/leverage) / (1 + mmr)`
pub fn estimate_liquidation_price(
    entry: Price,
    leverage: Leverage,
    side: Side,
    mmr: Decimal,
) -> Price {
    let imf = leverage.margin_fraction();

    let liq_price = match side {
        Side::Long => entry.value() * (Decimal::ONE - imf) / (Decimal::ONE - mmr),
        Side::Short => entry.value() * (Decimal::ONE + imf) / (Decimal::ONE + mmr),
    };

    Price::new_unchecked(liq_price.max(dec!(0.0001)))
}

/// Gate: the approximation is only meaningful while `1/leverage >= mmr`.
/// Below that the position is already under-margined and any number the
/// formula produces is nonsense; callers render "no estimate" instead.
pub fn estimate_available(leverage: Leverage, mmr: Decimal) -> bool {
    leverage.margin_fraction() >= mmr
}
