// 8.2: the keyed chart container. one entry per mounted chart, keyed by
// token symbol, so routing a feed update is a map lookup instead of
// branch-by-string dispatch over parallel per-token state.

use super::core::ChartLens;
use super::frame::{LensError, LensFrame};
use crate::config::LensConfig;
use crate::position::PositionSnapshot;
use crate::types::{Leverage, Price, PricePoint, Symbol, Timestamp};
use rust_decimal::Decimal;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct LensBook {
    config: LensConfig,
    charts: HashMap<Symbol, ChartLens>,
}

impl LensBook {
    pub fn new(config: LensConfig) -> Self {
        Self {
            config,
            charts: HashMap::new(),
        }
    }

    // Chart mount. idempotent: an already-mounted symbol keeps its state
    pub fn add_chart(&mut self, symbol: Symbol) -> &mut ChartLens {
        let config = self.config.clone();
        self.charts
            .entry(symbol)
            .or_insert_with(|| ChartLens::new(config))
    }

    // Chart unmount. anchor state is discarded with the entry
    pub fn remove_chart(&mut self, symbol: &Symbol) -> bool {
        self.charts.remove(symbol).is_some()
    }

    pub fn chart(&self, symbol: &Symbol) -> Option<&ChartLens> {
        self.charts.get(symbol)
    }

    pub fn chart_mut(&mut self, symbol: &Symbol) -> Result<&mut ChartLens, LensError> {
        self.charts
            .get_mut(symbol)
            .ok_or_else(|| LensError::UnknownSymbol(symbol.clone()))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.charts.keys()
    }

    pub fn set_leverage(
        &mut self,
        symbol: &Symbol,
        requested: Decimal,
    ) -> Result<Leverage, LensError> {
        Ok(self.chart_mut(symbol)?.set_leverage(requested))
    }

    pub fn set_position(
        &mut self,
        symbol: &Symbol,
        position: Option<PositionSnapshot>,
    ) -> Result<(), LensError> {
        self.chart_mut(symbol)?.set_position(position);
        Ok(())
    }

    /// The input boundary for the price feed. Raw values become `Price`
    /// here or are rejected; evaluations run in arrival order per symbol.
    pub fn on_price(
        &mut self,
        symbol: &Symbol,
        price: Decimal,
        timestamp: Option<Timestamp>,
    ) -> Result<LensFrame, LensError> {
        let chart = self
            .charts
            .get_mut(symbol)
            .ok_or_else(|| LensError::UnknownSymbol(symbol.clone()))?;
        let price = Price::new(price).ok_or(LensError::NonPositivePrice(price))?;

        let frame = chart.evaluate(PricePoint::new(price, timestamp));

        if self.config.verbose {
            for event in &frame.events {
                println!("[{}] {:?}", symbol, event);
            }
        }

        Ok(frame)
    }
}
