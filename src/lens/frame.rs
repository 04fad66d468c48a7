// 8.0.2: per-evaluation output and the lens error taxonomy.

use crate::events::LensEvent;
use crate::pnl_grid::PnlGridLine;
use crate::projector::{project, RenderBand};
use crate::types::{Price, Symbol};
use crate::viewport::Viewport;
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything the rendering layer needs for one tick. Recomputed on every
/// evaluation; only the anchor state persists behind it.
#[derive(Debug, Clone, Serialize)]
pub struct LensFrame {
    pub anchor: Price,
    pub viewport: Viewport,
    // None pre-trade or when the MMR gate fails. never zero, never stale
    pub liquidation: Option<Price>,
    pub grid: Vec<PnlGridLine>,
    pub events: Vec<LensEvent>,
}

impl LensFrame {
    /// Pixel offset for a price value under this frame's viewport.
    pub fn project(&self, price: Decimal, band: &RenderBand) -> f64 {
        project(price, &self.viewport, band)
    }

    pub fn recentered(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, LensEvent::Recentered { .. }))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LensError {
    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("no chart registered for {0}")]
    UnknownSymbol(Symbol),
}
