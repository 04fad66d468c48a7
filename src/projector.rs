// 7.0: price → pixel projection. price increases upward, pixel offsets
// increase downward, so the interpolation is inverted on purpose. pixels are
// the rendering layer's domain and stay f64; conversion happens here and
// nowhere else.

use crate::viewport::Viewport;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Fixed rendering band: padding above and below the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderBand {
    pub top_px: f64,
    pub bottom_px: f64,
    pub total_height_px: f64,
}

impl RenderBand {
    pub fn new(top_px: f64, bottom_px: f64, total_height_px: f64) -> Self {
        Self {
            top_px,
            bottom_px,
            total_height_px,
        }
    }

    pub fn plot_area_px(&self) -> f64 {
        self.total_height_px - self.top_px - self.bottom_px
    }
}

// Decimal → f64 is total; the Option is a trait artifact
fn as_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Vertical pixel offset for a price. Accepts any Decimal so off-domain
/// overlay values (deep-loss grid lines) project past the band and clip.
pub fn project(price: Decimal, viewport: &Viewport, band: &RenderBand) -> f64 {
    let ratio = (price - viewport.y_min().value()) / viewport.price_range();
    band.top_px + band.plot_area_px() * (1.0 - as_f64(ratio))
}

/// Inverse mapping for the gesture layer: pixel offset back to a price
/// value. None when the band is degenerate or the offset is not finite.
pub fn unproject(offset_px: f64, viewport: &Viewport, band: &RenderBand) -> Option<Decimal> {
    let plot_area = band.plot_area_px();
    if plot_area <= 0.0 {
        return None;
    }
    let ratio = Decimal::from_f64(1.0 - (offset_px - band.top_px) / plot_area)?;
    Some(viewport.y_min().value() + viewport.price_range() * ratio)
}
