//! Frame-level integration tests.
//!
//! End-to-end scenarios across the evaluation layer: worked numbers from
//! the lens contract, the MMR gate at the call-site boundary, multi-chart
//! routing, and projection of a full frame.

use lens_core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tick(value: Decimal) -> PricePoint {
    PricePoint::spot(Price::new_unchecked(value))
}

fn position(entry: Decimal, leverage: Decimal, side: Side) -> PositionSnapshot {
    PositionSnapshot::open(
        Price::new_unchecked(entry),
        Leverage::new(leverage).unwrap(),
        side,
    )
}

#[test]
fn worked_example_viewport_and_liquidation() {
    let mut lens = ChartLens::new(LensConfig::default());
    lens.set_position(Some(position(dec!(100), dec!(10), Side::Long)));

    let frame = lens.evaluate(tick(dec!(100)));

    // anchor=100, lev=10, span=1.2, band=4bps → half = max(12, 0.004) = 12
    assert_eq!(frame.viewport.y_min().value(), dec!(88));
    assert_eq!(frame.viewport.y_max().value(), dec!(112));

    // liq = 100 * (1 - 0.1) / (1 - 0.005) ≈ 90.45
    assert_eq!(frame.liquidation.unwrap().value().round_dp(2), dec!(90.45));
}

#[test]
fn short_liquidation_sits_above_entry() {
    let mut lens = ChartLens::new(LensConfig::default());
    lens.set_position(Some(position(dec!(100), dec!(10), Side::Short)));

    let frame = lens.evaluate(tick(dec!(100)));

    // liq = 100 * (1 + 0.1) / (1 + 0.005) ≈ 109.45
    assert_eq!(frame.liquidation.unwrap().value().round_dp(2), dec!(109.45));
}

#[test]
fn mmr_gate_boundary_at_the_call_site() {
    // default mmr 0.005: 200x sits exactly on the gate, 201x is past it
    let mut lens = ChartLens::new(LensConfig::default());

    lens.set_position(Some(position(dec!(100), dec!(200), Side::Long)));
    assert!(lens.evaluate(tick(dec!(100))).liquidation.is_some());

    lens.set_position(Some(position(dec!(100), dec!(201), Side::Long)));
    assert!(lens.evaluate(tick(dec!(100))).liquidation.is_none());
}

#[test]
fn gate_moves_with_configured_mmr() {
    // alts preset: mmr 0.01, gate at 100x
    let mut lens = ChartLens::new(LensConfig::alts());

    lens.set_position(Some(position(dec!(100), dec!(50), Side::Long)));
    assert!(lens.evaluate(tick(dec!(100))).liquidation.is_some());

    lens.set_position(Some(position(dec!(100), dec!(101), Side::Long)));
    assert!(lens.evaluate(tick(dec!(100))).liquidation.is_none());
}

#[test]
fn pre_trade_has_no_liquidation_line() {
    let mut lens = ChartLens::new(LensConfig::default());
    lens.set_leverage(dec!(50));
    assert!(lens.evaluate(tick(dec!(100))).liquidation.is_none());
}

#[test]
fn frame_projects_into_the_band() {
    let mut lens = ChartLens::new(LensConfig::default());
    lens.set_position(Some(position(dec!(100), dec!(10), Side::Long)));
    let frame = lens.evaluate(tick(dec!(100)));
    let band = RenderBand::new(20.0, 30.0, 450.0);

    // viewport edges land on the plot edges
    assert_eq!(frame.project(frame.viewport.y_max().value(), &band), 20.0);
    assert_eq!(frame.project(frame.viewport.y_min().value(), &band), 420.0);

    // grid lines descend in pixel space as PnL rises
    let offsets: Vec<f64> = frame
        .grid
        .iter()
        .map(|line| frame.project(line.price, &band))
        .collect();
    for pair in offsets.windows(2) {
        assert!(pair[0] > pair[1]);
    }

    // the liquidation line sits inside the plot area at 10x
    let liq_px = frame.project(frame.liquidation.unwrap().value(), &band);
    assert!(liq_px > 20.0 && liq_px < 420.0);
}

#[test]
fn book_keeps_per_symbol_state_independent() {
    let mut book = LensBook::new(LensConfig::default());
    let btc = Symbol::new("BTC");
    let eth = Symbol::new("ETH");
    book.add_chart(btc.clone());
    book.add_chart(eth.clone());

    book.set_position(&btc, Some(position(dec!(50000), dec!(10), Side::Long)))
        .unwrap();

    // BTC is tracked, ETH untracked. the same relative move recenters only BTC
    let btc_frame = book.on_price(&btc, dec!(56000), None).unwrap();
    let eth_frame = book.on_price(&eth, dec!(3000), None).unwrap();

    assert!(btc_frame.recentered());
    assert_eq!(btc_frame.anchor.value(), dec!(56000));
    assert_eq!(eth_frame.anchor.value(), dec!(3000));
    assert!(!book.chart(&eth).unwrap().tracker().is_tracking());
}

#[test]
fn symbol_spellings_hit_the_same_chart() {
    let mut book = LensBook::new(LensConfig::default());
    book.add_chart(Symbol::new("btc"));
    assert!(book.on_price(&Symbol::new("BTC"), dec!(50000), None).is_ok());
    assert!(book.on_price(&Symbol::new(" Btc "), dec!(50100), None).is_ok());
}

#[test]
fn errors_are_explicit_not_silent() {
    let mut book = LensBook::new(LensConfig::default());
    book.add_chart(Symbol::new("BTC"));

    let err = book
        .on_price(&Symbol::new("BTC"), dec!(-1), None)
        .unwrap_err();
    assert!(err.to_string().contains("positive"));

    let err = book
        .on_price(&Symbol::new("SOL"), dec!(150), None)
        .unwrap_err();
    assert!(err.to_string().contains("SOL"));
}

#[test]
fn frame_serializes_for_the_render_bridge() {
    let mut lens = ChartLens::new(LensConfig::default());
    lens.set_position(Some(position(dec!(100), dec!(10), Side::Long)));
    let frame = lens.evaluate(tick(dec!(100)));

    let json = serde_json::to_string(&frame).unwrap();
    assert!(json.contains("viewport"));
    assert!(json.contains("liquidation"));
    assert!(json.contains("AnchorSeeded"));
}

#[test]
fn grid_tracks_effective_leverage() {
    let mut lens = ChartLens::new(LensConfig::default());
    lens.set_leverage(dec!(4));

    let frame = lens.evaluate(tick(dec!(100)));
    // -100% of equity at 4x = -25% price move
    assert_eq!(frame.grid[0].price, dec!(75));
    assert_eq!(frame.grid[6].price, dec!(125));

    // opening a 10x position retargets the grid to the position's leverage
    lens.set_position(Some(position(dec!(100), dec!(10), Side::Long)));
    let frame = lens.evaluate(tick(dec!(100)));
    assert_eq!(frame.grid[0].price, dec!(90));
}
