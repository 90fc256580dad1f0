use crate::error::ModelError;
use crate::metrics::calculate_intensity;
use crate::types::{Exchange, Interval, LiquidationType, Symbol, TimestampMS};
use crate::validation::{require_positive, require_symbol, require_timestamp, Validate};
use serde::{Deserialize, Serialize};

/// Liquidation volume resting at one price
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiquidationLevel {
    pub price: f64,
    pub long_liquidations: f64,  // USD
    pub short_liquidations: f64, // USD
    pub total_volume: f64,       // USD
    /// 0-100, relative to the heaviest level of the heatmap
    pub intensity: f64,
}

impl LiquidationLevel {
    /// Level with `total_volume` derived and no intensity yet
    pub fn new(price: f64, long_liquidations: f64, short_liquidations: f64) -> Self {
        Self {
            price,
            long_liquidations,
            short_liquidations,
            total_volume: long_liquidations + short_liquidations,
            intensity: 0.0,
        }
    }

    /// Copy of this level scored against the heaviest level's volume
    pub fn with_intensity(&self, max_volume: f64) -> Self {
        Self {
            intensity: calculate_intensity(self.total_volume, max_volume),
            ..self.clone()
        }
    }

    pub fn is_significant(&self, threshold: f64) -> bool {
        self.intensity >= threshold
    }
}

/// Contiguous band of heavy levels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiquidationCluster {
    pub price_start: f64,
    pub price_end: f64,
    pub peak_price: f64,
    pub peak_intensity: f64,
    pub total_volume: f64,
    /// Volume-weighted average price of the levels in the band
    pub weighted_price: f64,
    pub level_count: u32,
}

/// Price band flagged as dangerous for one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalZone {
    pub price_start: f64,
    pub price_end: f64,
    #[serde(rename = "type")]
    pub zone_type: LiquidationType,
    pub intensity: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSummary {
    pub total_long_liquidations: f64,
    pub total_short_liquidations: f64,
    pub total_volume: f64,
    pub max_intensity: f64,
    pub weighted_avg_long_price: f64,
    pub weighted_avg_short_price: f64,
    pub significant_levels: u32,
    pub critical_zones: Vec<CriticalZone>,
}

/// Aggregated, query-ready heatmap for one symbol and interval.
///
/// Levels, clusters and the summary are computed by the aggregation
/// service; this type only carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapData {
    pub symbol: Symbol,
    /// None for a cross-exchange heatmap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<Exchange>,
    pub timestamp: TimestampMS,
    pub interval: Interval,
    pub current_price: f64,
    pub levels: Vec<LiquidationLevel>,
    #[serde(default)]
    pub clusters: Vec<LiquidationCluster>,
    #[serde(default)]
    pub summary: HeatmapSummary,
}

impl HeatmapData {
    pub fn new(
        symbol: impl Into<Symbol>,
        timestamp: TimestampMS,
        interval: Interval,
        current_price: f64,
        levels: Vec<LiquidationLevel>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: None,
            timestamp,
            interval,
            current_price,
            levels,
            clusters: Vec::new(),
            summary: HeatmapSummary::default(),
        }
    }

    pub fn max_level_volume(&self) -> f64 {
        self.levels
            .iter()
            .map(|l| l.total_volume)
            .fold(0.0, f64::max)
    }

    /// Copy with every level's intensity rescored against the heaviest level
    pub fn with_intensities(&self) -> Self {
        let max_volume = self.max_level_volume();
        Self {
            levels: self
                .levels
                .iter()
                .map(|l| l.with_intensity(max_volume))
                .collect(),
            ..self.clone()
        }
    }

    pub fn significant_levels(&self, threshold: f64) -> impl Iterator<Item = &LiquidationLevel> {
        self.levels.iter().filter(move |l| l.is_significant(threshold))
    }
}

impl Validate for HeatmapData {
    fn validate(&self) -> Result<(), ModelError> {
        require_symbol(&self.symbol)?;
        require_timestamp(self.timestamp)?;
        require_positive("current_price", self.current_price)?;
        if self.levels.is_empty() {
            return Err(ModelError::validation(
                "levels",
                "at least one liquidation level is required",
            ));
        }
        Ok(())
    }
}
