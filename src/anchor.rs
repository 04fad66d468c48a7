//! Anchor recenter state machine.
//!
//! The anchor is the price treated as the vertical center of the chart. With
//! no open position the anchor mirrors the live price on every evaluation
//! and nothing persists. While a position is open the anchor holds still so
//! the trader keeps a stable frame of reference, and only jumps once the
//! live price has covered 85% of the visible half-range. The threshold keeps
//! the price line off the chart edge without recentering on every
//! fluctuation.
//!
//! One tracker per chart, created Untracked, discarded with the chart.
//! Single writer: only the owning evaluation mutates it, in arrival order.

use crate::events::LensEvent;
use crate::position::PositionSnapshot;
use crate::types::Price;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

// Fraction of the half-range the price must cover before the anchor jumps.
pub const RECENTER_THRESHOLD: Decimal = dec!(0.85);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnchorTracker {
    // The persisted visual center. None = Untracked (pre-trade)
    center_anchor: Option<Price>,
    // Entry price the anchor was last seeded from, to catch averaging
    seeded_entry: Option<Price>,
}

impl AnchorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.center_anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Price> {
        self.center_anchor
    }

    /// Mode sync, run first on every evaluation. Returns the effective
    /// anchor for this tick and the lifecycle event, if any.
    ///
    /// Untracked: the live price is the anchor. Tracked: seed from the
    /// entry price when the position is newly open, the anchor is unset,
    /// or the entry itself moved (averaging).
    pub fn sync(
        &mut self,
        live: Price,
        position: Option<&PositionSnapshot>,
    ) -> (Price, Option<LensEvent>) {
        match position.filter(|p| p.is_open) {
            Some(pos) => {
                if let Some(anchor) = self.center_anchor {
                    if self.seeded_entry == Some(pos.entry_price) {
                        return (anchor, None);
                    }
                }
                self.center_anchor = Some(pos.entry_price);
                self.seeded_entry = Some(pos.entry_price);
                (
                    pos.entry_price,
                    Some(LensEvent::AnchorSeeded {
                        anchor: pos.entry_price,
                    }),
                )
            }
            None => {
                let was_tracking = self.center_anchor.is_some();
                self.center_anchor = None;
                self.seeded_entry = None;
                let event = was_tracking.then_some(LensEvent::TrackingCleared);
                (live, event)
            }
        }
    }

    /// Hysteresis check, run after the viewport is known. Jumps the anchor
    /// to the live price when the deviation reaches the threshold. A
    /// degenerate half-range is a silent no-op, not an error.
    pub fn maybe_recenter(&mut self, live: Price, half_range: Decimal) -> Option<LensEvent> {
        let anchor = self.center_anchor?;

        if half_range <= Decimal::ZERO {
            return None;
        }

        let deviation = (live.value() - anchor.value()).abs();
        if deviation >= RECENTER_THRESHOLD * half_range {
            self.center_anchor = Some(live);
            return Some(LensEvent::Recentered {
                from: anchor,
                to: live,
            });
        }

        None
    }
}
