//! Leverage Lens Simulation.
//!
//! Walks one chart through the full lens lifecycle: pre-trade browsing,
//! position open, recenter hysteresis, liquidation gating, and projection
//! into a rendering band.

use lens_core::*;
use rust_decimal_macros::dec;

fn main() {
    println!("Leverage Lens Core Simulation");
    println!("Single Chart, Isolated Margin Estimates, Full Lifecycle\n");

    scenario_1_pre_trade_browsing();
    scenario_2_leverage_compression();
    scenario_3_recenter_hysteresis();
    scenario_4_liquidation_gating();
    scenario_5_grid_projection();

    println!("\nAll simulations completed successfully.");
}

/// Pre-trade: the anchor mirrors the live price on every tick.
fn scenario_1_pre_trade_browsing() {
    println!("Scenario 1: Pre-Trade Browsing\n");

    let mut book = LensBook::new(LensConfig::default());
    let btc = Symbol::new("BTC");
    book.add_chart(btc.clone());
    book.set_leverage(&btc, dec!(10)).unwrap();

    for price in [dec!(50000), dec!(50300), dec!(49800)] {
        let frame = book.on_price(&btc, price, Some(Timestamp::now())).unwrap();
        println!(
            "  tick ${}: viewport [{} .. {}], anchor {}",
            price,
            frame.viewport.y_min(),
            frame.viewport.y_max(),
            frame.anchor
        );
    }
    println!();
}

/// Higher leverage compresses the visible range, down to the bps floor.
fn scenario_2_leverage_compression() {
    println!("Scenario 2: Leverage Compression\n");

    let mut lens = ChartLens::new(LensConfig::default());
    let tick = PricePoint::spot(Price::new_unchecked(dec!(100)));

    for leverage in [dec!(1), dec!(10), dec!(50), dec!(500)] {
        lens.set_leverage(leverage);
        let frame = lens.evaluate(tick);
        println!(
            "  {}x: range {} ({} .. {})",
            leverage,
            frame.viewport.price_range(),
            frame.viewport.y_min(),
            frame.viewport.y_max()
        );
    }
    println!();
}

/// Tracked anchor holds still until price covers 85% of the half-range.
fn scenario_3_recenter_hysteresis() {
    println!("Scenario 3: Recenter Hysteresis\n");

    let mut book = LensBook::new(LensConfig { verbose: true, ..LensConfig::default() });
    let eth = Symbol::new("ETH");
    book.add_chart(eth.clone());
    book.set_position(
        &eth,
        Some(PositionSnapshot::open(
            Price::new_unchecked(dec!(3000)),
            Leverage::new(dec!(10)).unwrap(),
            Side::Long,
        )),
    )
    .unwrap();

    // half-range at 10x is 360, threshold 306
    for price in [dec!(3000), dec!(3150), dec!(3290), dec!(3310)] {
        let frame = book.on_price(&eth, price, None).unwrap();
        println!(
            "  tick ${}: anchor {} recentered={}",
            price,
            frame.anchor,
            frame.recentered()
        );
    }

    println!("  closing position...");
    book.set_position(&eth, None).unwrap();
    let frame = book.on_price(&eth, dec!(3100), None).unwrap();
    println!("  tick $3100: anchor {} (untracked again)\n", frame.anchor);
}

/// The MMR gate: past 1/leverage < mmr there is no meaningful estimate.
fn scenario_4_liquidation_gating() {
    println!("Scenario 4: Liquidation Estimate and Gating\n");

    let config = LensConfig::default();
    let mut lens = ChartLens::new(config.clone());
    let tick = PricePoint::spot(Price::new_unchecked(dec!(100)));

    for leverage in [dec!(5), dec!(10), dec!(100), dec!(250)] {
        lens.set_position(Some(PositionSnapshot::open(
            Price::new_unchecked(dec!(100)),
            Leverage::new(leverage).unwrap(),
            Side::Long,
        )));
        let frame = lens.evaluate(tick);
        match frame.liquidation {
            Some(liq) => println!("  {}x long from $100: liq ≈ ${}", leverage, liq.value().round_dp(2)),
            None => println!("  {}x long from $100: no estimate (under-margined at mmr {})", leverage, config.margin.maintenance_margin_ratio),
        }
    }
    println!();
}

/// Grid lines and liquidation project into the rendering band.
fn scenario_5_grid_projection() {
    println!("Scenario 5: Grid Projection\n");

    let mut lens = ChartLens::new(LensConfig::default());
    lens.set_position(Some(PositionSnapshot::open(
        Price::new_unchecked(dec!(100)),
        Leverage::new(dec!(10)).unwrap(),
        Side::Long,
    )));

    let frame = lens.evaluate(PricePoint::spot(Price::new_unchecked(dec!(100))));
    let band = RenderBand::new(20.0, 30.0, 450.0);

    for line in &frame.grid {
        println!(
            "  {:>6}% equity at ${:<6} → y = {:.1}px",
            line.pnl_pct * dec!(100),
            line.price,
            frame.project(line.price, &band)
        );
    }
    if let Some(liq) = frame.liquidation {
        println!(
            "  liquidation at ${} → y = {:.1}px",
            liq.value().round_dp(2),
            frame.project(liq.value(), &band)
        );
    }
}
