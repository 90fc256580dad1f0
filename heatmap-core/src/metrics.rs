//! Derived liquidation metrics
//!
//! Pure functions over domain values. When a calculation's preconditions
//! do not hold they return 0 ("cannot estimate") instead of failing; only
//! caller errors such as a zero leverage are reported.

use crate::error::ModelError;
use crate::types::LiquidationType;

/// Maintenance margin rate used for leverage and liquidation price estimates
pub const MAINTENANCE_MARGIN: f64 = 0.004;

/// 10% price impact per 100% of depth consumed
pub const IMPACT_FACTOR: f64 = 0.1;

/// Intensity at or above which a level counts as significant
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 50.0;

/// Price at which a position opened at `entry_price` gets liquidated.
///
/// Long: `entry × (1 − 1/leverage + mm)`. Short: `entry × (1 + 1/leverage − mm)`.
pub fn calculate_liquidation_price(
    entry_price: f64,
    leverage: f64,
    direction: LiquidationType,
    maintenance_margin: f64,
) -> Result<f64, ModelError> {
    if leverage == 0.0 || !leverage.is_finite() {
        return Err(ModelError::InvalidArgument(format!(
            "leverage must be non-zero and finite, got {}",
            leverage
        )));
    }

    let price = match direction {
        // Long liquidation: price drops
        LiquidationType::Long => entry_price * (1.0 - 1.0 / leverage + maintenance_margin),
        // Short liquidation: price rises
        LiquidationType::Short => entry_price * (1.0 + 1.0 / leverage - maintenance_margin),
    };
    Ok(price)
}

/// Percentage move expected when `liquidation_volume` hits a book holding
/// `market_depth` of resting liquidity.
pub fn estimate_price_impact(liquidation_volume: f64, market_depth: f64) -> f64 {
    if market_depth == 0.0 {
        return 0.0;
    }
    (liquidation_volume / market_depth) * IMPACT_FACTOR * 100.0
}

/// Intensity score in [0, 100] of a level relative to the heaviest level.
pub fn calculate_intensity(volume: f64, max_volume: f64) -> f64 {
    if max_volume <= 0.0 {
        return 0.0;
    }
    ((volume / max_volume) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liquidation_price_long_and_short() {
        let long = calculate_liquidation_price(40000.0, 10.0, LiquidationType::Long, 0.0).unwrap();
        assert!((long - 36000.0).abs() < 1e-6);

        let short =
            calculate_liquidation_price(40000.0, 10.0, LiquidationType::Short, 0.0).unwrap();
        assert!((short - 44000.0).abs() < 1e-6);

        let with_margin =
            calculate_liquidation_price(40000.0, 10.0, LiquidationType::Long, MAINTENANCE_MARGIN)
                .unwrap();
        assert!((with_margin - 36160.0).abs() < 1e-6);
    }

    #[test]
    fn test_liquidation_price_zero_leverage() {
        let result = calculate_liquidation_price(40000.0, 0.0, LiquidationType::Long, 0.004);
        assert!(matches!(result, Err(ModelError::InvalidArgument(_))));
    }

    #[test]
    fn test_price_impact() {
        assert_eq!(estimate_price_impact(1_000_000.0, 0.0), 0.0);
        let impact = estimate_price_impact(500_000.0, 1_000_000.0);
        assert!((impact - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_intensity() {
        assert_eq!(calculate_intensity(50000.0, 100000.0), 50.0);
        assert_eq!(calculate_intensity(50000.0, 0.0), 0.0);
        assert_eq!(calculate_intensity(150000.0, 100000.0), 100.0);
    }
}
