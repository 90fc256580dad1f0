use crate::error::ModelError;
use crate::types::{Exchange, Symbol, TimestampMS};
use crate::validation::{require_positive, require_symbol, require_timestamp, Validate};
use serde::{Deserialize, Serialize};

/// Aggregated positions on one side of a price level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub count: u32,
    pub volume: f64, // USD
    pub avg_leverage: f64,
}

/// Open positions clustered at a price level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionDistribution {
    pub exchange: Exchange,
    pub symbol: Symbol,
    pub timestamp: TimestampMS,
    pub price_level: f64,
    pub long_positions: PositionSummary,
    pub short_positions: PositionSummary,
}

impl PositionDistribution {
    pub fn total_volume(&self) -> f64 {
        self.long_positions.volume + self.short_positions.volume
    }

    /// Long over short USD volume, 0 when there is no short volume
    pub fn long_short_ratio(&self) -> f64 {
        if self.short_positions.volume > 0.0 {
            self.long_positions.volume / self.short_positions.volume
        } else {
            0.0
        }
    }
}

impl Validate for PositionDistribution {
    fn validate(&self) -> Result<(), ModelError> {
        require_symbol(&self.symbol)?;
        require_timestamp(self.timestamp)?;
        require_positive("price_level", self.price_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution() -> PositionDistribution {
        PositionDistribution {
            exchange: Exchange::Bybit,
            symbol: Symbol::BTCUSDT,
            timestamp: 1000000,
            price_level: 42000.0,
            long_positions: PositionSummary {
                count: 12,
                volume: 300000.0,
                avg_leverage: 12.5,
            },
            short_positions: PositionSummary {
                count: 4,
                volume: 100000.0,
                avg_leverage: 8.0,
            },
        }
    }

    #[test]
    fn test_ratios() {
        let dist = distribution();
        assert_eq!(dist.total_volume(), 400000.0);
        assert_eq!(dist.long_short_ratio(), 3.0);

        let mut no_shorts = dist.clone();
        no_shorts.short_positions = PositionSummary::default();
        assert_eq!(no_shorts.long_short_ratio(), 0.0);
    }

    #[test]
    fn test_validation() {
        assert!(distribution().validate().is_ok());

        let mut dist = distribution();
        dist.price_level = 0.0;
        assert_eq!(dist.validate().unwrap_err().field(), Some("price_level"));

        let mut dist = distribution();
        dist.timestamp = 0;
        assert_eq!(dist.validate().unwrap_err().field(), Some("timestamp"));
    }
}
