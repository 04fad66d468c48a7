// 3.0 config.rs: all settings in one place. lens geometry and margin params.
// 3.1 LensParams controls how the viewport and grid scale with leverage.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Bps, Leverage};

// Viewport and overlay geometry. never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensParams {
    // Visible half-span as a fraction of the anchor at 1x, compressed by leverage
    pub pnl_span: Decimal,
    // Floor on the visible band so extreme leverage never collapses the chart
    pub min_band_bps: Bps,
    // Multiplier applied to the fixed PnL grid levels
    pub grid_span: Decimal,
}

impl Default for LensParams {
    fn default() -> Self {
        Self {
            pnl_span: dec!(1.2),
            min_band_bps: Bps::new(4),
            grid_span: dec!(1),
        }
    }
}

/** 3.2: margin params. MMR is injected here, never hardcoded in the formula,
so per-asset tiers can land without touching the math. */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginParams {
    // Maintenance margin ratio used by the client-side liquidation estimate
    pub maintenance_margin_ratio: Decimal,
    // Cap applied to user leverage input before it reaches the lens math
    pub max_leverage: Leverage,
}

impl Default for MarginParams {
    fn default() -> Self {
        Self {
            maintenance_margin_ratio: dec!(0.005),
            max_leverage: Leverage::new(dec!(500)).unwrap(),
        }
    }
}

// The complete lens configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensConfig {
    pub lens: LensParams,
    pub margin: MarginParams,
    // Print evaluation events as they happen
    #[serde(default)]
    pub verbose: bool,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            lens: LensParams::default(),
            margin: MarginParams::default(),
            verbose: false,
        }
    }
}

impl LensConfig {
    // Preset for deep majors (BTC, ETH): tight MMR, full leverage range
    pub fn majors() -> Self {
        let mut config = Self::default();
        config.margin.maintenance_margin_ratio = dec!(0.005);
        config.margin.max_leverage = Leverage::new(dec!(500)).unwrap();
        config
    }

    // Preset for thinner alts: wider MMR, lower cap, wider minimum band
    pub fn alts() -> Self {
        let mut config = Self::default();
        config.margin.maintenance_margin_ratio = dec!(0.01);
        config.margin.max_leverage = Leverage::new(dec!(50)).unwrap();
        config.lens.min_band_bps = Bps::new(10);
        config
    }

    // Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lens.pnl_span <= Decimal::ZERO {
            return Err(ConfigError::InvalidLens {
                reason: "pnl_span must be positive".to_string(),
            });
        }

        if self.lens.min_band_bps.value() <= 0 {
            return Err(ConfigError::InvalidLens {
                reason: "min_band_bps must be positive".to_string(),
            });
        }

        if self.lens.grid_span <= Decimal::ZERO {
            return Err(ConfigError::InvalidLens {
                reason: "grid_span must be positive".to_string(),
            });
        }

        // MMR is a fraction of notional, must sit strictly inside (0, 1)
        if self.margin.maintenance_margin_ratio <= Decimal::ZERO
            || self.margin.maintenance_margin_ratio >= Decimal::ONE
        {
            return Err(ConfigError::InvalidMargin {
                reason: "MMR must be between 0 and 1".to_string(),
            });
        }

        Ok(())
    }
}

// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLens { reason: String },
    InvalidMargin { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = LensConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lens.pnl_span, dec!(1.2));
        assert_eq!(config.lens.min_band_bps.value(), 4);
    }

    #[test]
    fn test_presets_valid() {
        assert!(LensConfig::majors().validate().is_ok());
        let alts = LensConfig::alts();
        assert!(alts.validate().is_ok());
        assert_eq!(alts.margin.max_leverage.value(), dec!(50));
    }

    #[test]
    fn test_invalid_span() {
        let mut config = LensConfig::default();
        config.lens.pnl_span = dec!(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLens { .. })
        ));
    }

    #[test]
    fn test_invalid_mmr() {
        let mut config = LensConfig::default();
        config.margin.maintenance_margin_ratio = dec!(1.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMargin { .. })
        ));

        config.margin.maintenance_margin_ratio = dec!(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = LensConfig::alts();
        let json = serde_json::to_string(&config).unwrap();
        let back: LensConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.margin.maintenance_margin_ratio,
            config.margin.maintenance_margin_ratio
        );
        assert_eq!(back.lens.min_band_bps, config.lens.min_band_bps);
    }
}
