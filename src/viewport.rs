// 4.0: leverage-lens viewport. higher leverage compresses the visible price
// range so the moves that matter to the trader fill the chart height, with a
// bps floor so extreme leverage never collapses the band to nothing.

use crate::config::LensParams;
use crate::types::{Leverage, Price};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

// Relative floor keeping y_min in the price domain when the raw half-span
// would reach past zero (only possible at leverage <= pnl_span).
const PRICE_DOMAIN_FLOOR: Decimal = dec!(0.0001);

// Visible price range. y_min < y_max, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    y_min: Price,
    y_max: Price,
}

impl Viewport {
    #[must_use]
    pub fn new(y_min: Price, y_max: Price) -> Option<Self> {
        if y_min.value() < y_max.value() {
            Some(Self { y_min, y_max })
        } else {
            None
        }
    }

    pub fn new_unchecked(y_min: Price, y_max: Price) -> Self {
        debug_assert!(y_min.value() < y_max.value());
        Self { y_min, y_max }
    }

    pub fn y_min(&self) -> Price {
        self.y_min
    }

    pub fn y_max(&self) -> Price {
        self.y_max
    }

    pub fn price_range(&self) -> Decimal {
        self.y_max.value() - self.y_min.value()
    }

    // Half of the visible range. drives the recenter hysteresis
    pub fn half_range(&self) -> Decimal {
        self.price_range() / dec!(2)
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.y_min.value() <= price && price <= self.y_max.value()
    }
}

// 4.1: the lens itself. half-span is the larger of the leverage-scaled span
// and the minimum-band floor; the viewport is centered on the anchor.
pub fn compute_viewport(anchor: Price, leverage: Leverage, params: &LensParams) -> Viewport {
    let scaled = anchor.value() * params.pnl_span / leverage.value();
    let floor = anchor.value() * params.min_band_bps.as_fraction();
    let half = scaled.max(floor);

    let y_max = anchor.value() + half;
    let y_min = (anchor.value() - half).max(anchor.value() * PRICE_DOMAIN_FLOOR);

    Viewport::new_unchecked(Price::new_unchecked(y_min), Price::new_unchecked(y_max))
}
