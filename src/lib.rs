// lens-core: leverage-lens chart core for perpetuals.
// computes what a leveraged trader needs to see: the viewport compressed by
// leverage, the liquidation threshold, the PnL reference grid, and the
// anchor recenter decision. all computation is deterministic with no
// external I/O; rendering, feeds and position tracking are collaborators.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Side, Price, Leverage, Bps, Timestamp, Symbol
//   2.x  position.rs: read-only position snapshot, leveraged PnL fraction
//   3.x  config.rs: lens geometry, margin params, presets, validation
//   4.x  viewport.rs: leverage-compressed visible range with bps floor
//   5.x  pnl_grid.rs: seven-level PnL reference grid
//   6.x  events.rs: anchor lifecycle notifications
//   7.x  projector.rs: price → pixel mapping (Y-inverted) and inverse
//   8.x  lens/: evaluation layer: ChartLens per chart, LensBook per session
//        anchor.rs: recenter state machine with 85% hysteresis

pub mod anchor;
pub mod config;
pub mod events;
pub mod lens;
pub mod liquidation;
pub mod pnl_grid;
pub mod position;
pub mod projector;
pub mod types;
pub mod viewport;

// re exports for convenience
pub use anchor::{AnchorTracker, RECENTER_THRESHOLD};
pub use config::{ConfigError, LensConfig, LensParams, MarginParams};
pub use events::LensEvent;
pub use lens::{ChartLens, LensBook, LensError, LensFrame};
pub use liquidation::{estimate_available, estimate_liquidation_price};
pub use pnl_grid::{pnl_grid, PnlGridLine, PNL_GRID_LEVELS};
pub use position::PositionSnapshot;
pub use projector::{project, unproject, RenderBand};
pub use types::{Bps, Leverage, Price, PricePoint, Side, Symbol, Timestamp};
pub use viewport::{compute_viewport, Viewport};
