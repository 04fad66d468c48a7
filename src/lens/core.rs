// 8.1: per-chart evaluation. owns the anchor tracker plus the two inputs
// that outlive a tick (pre-trade leverage, position snapshot) and turns each
// price update into a LensFrame.

use super::frame::LensFrame;
use crate::anchor::AnchorTracker;
use crate::config::LensConfig;
use crate::liquidation::{estimate_available, estimate_liquidation_price};
use crate::pnl_grid::pnl_grid;
use crate::position::PositionSnapshot;
use crate::types::{Leverage, PricePoint};
use crate::viewport::compute_viewport;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct ChartLens {
    config: LensConfig,
    tracker: AnchorTracker,
    // Pre-trade slider value, used while no position is open
    leverage: Leverage,
    position: Option<PositionSnapshot>,
}

impl ChartLens {
    pub fn new(config: LensConfig) -> Self {
        Self {
            config,
            tracker: AnchorTracker::new(),
            leverage: Leverage::saturating(Decimal::ONE),
            position: None,
        }
    }

    /// Update the pre-trade leverage slider. Raw input clamps into
    /// [1, max_leverage]; returns the applied value.
    pub fn set_leverage(&mut self, requested: Decimal) -> Leverage {
        self.leverage = Leverage::saturating(requested).min(self.config.margin.max_leverage);
        self.leverage
    }

    pub fn set_position(&mut self, position: Option<PositionSnapshot>) {
        self.position = position;
    }

    pub fn leverage(&self) -> Leverage {
        self.leverage
    }

    pub fn position(&self) -> Option<&PositionSnapshot> {
        self.position.as_ref()
    }

    pub fn tracker(&self) -> &AnchorTracker {
        &self.tracker
    }

    // Open position's leverage wins over the slider
    fn effective_leverage(&self) -> Leverage {
        self.open_position()
            .map(|p| p.leverage)
            .unwrap_or(self.leverage)
    }

    fn open_position(&self) -> Option<&PositionSnapshot> {
        self.position.as_ref().filter(|p| p.is_open)
    }

    /// One evaluation: sync anchor mode, compute the viewport, run the
    /// hysteresis check against it, then derive the overlays. Must be
    /// called in price-arrival order; the recenter decision depends on the
    /// anchor left by the previous call.
    pub fn evaluate(&mut self, tick: PricePoint) -> LensFrame {
        let live = tick.price;
        let mut events = Vec::new();

        let (mut anchor, sync_event) = self.tracker.sync(live, self.position.as_ref());
        events.extend(sync_event);

        let leverage = self.effective_leverage();
        let mut viewport = compute_viewport(anchor, leverage, &self.config.lens);

        if let Some(event) = self.tracker.maybe_recenter(live, viewport.half_range()) {
            anchor = live;
            viewport = compute_viewport(anchor, leverage, &self.config.lens);
            events.push(event);
        }

        let mmr = self.config.margin.maintenance_margin_ratio;
        let liquidation = self.open_position().and_then(|pos| {
            estimate_available(pos.leverage, mmr)
                .then(|| estimate_liquidation_price(pos.entry_price, pos.leverage, pos.side, mmr))
        });

        let grid = pnl_grid(anchor, leverage, self.config.lens.grid_span);

        LensFrame {
            anchor,
            viewport,
            liquidation,
            grid,
            events,
        }
    }
}
