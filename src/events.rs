// 6.0: anchor lifecycle notifications. each evaluation reports what happened
// to the visual center so external systems can react. the rendering layer
// uses Recentered to animate the jump if it wants to; the core contract is
// the discrete jump itself.

use crate::types::Price;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LensEvent {
    // Anchor seeded from an entry price (position newly open, or averaged)
    AnchorSeeded { anchor: Price },
    // Hysteresis threshold crossed, anchor jumped to the live price
    Recentered { from: Price, to: Price },
    // Position closed, anchor state discarded
    TrackingCleared,
}
