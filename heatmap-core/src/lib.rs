//! Heatmap Core Domain
//!
//! Shared record types for the liquidation heatmap pipeline, the validation
//! rules producers run before publishing, and the derived metrics consumers
//! compute from them. No async, no I/O.

pub mod error;
pub mod metrics;
pub mod types;
pub mod validation;

// Re-export common types
pub use error::ModelError;
pub use metrics::{
    calculate_intensity, calculate_liquidation_price, estimate_price_impact,
    DEFAULT_SIGNIFICANCE_THRESHOLD, IMPACT_FACTOR, MAINTENANCE_MARGIN,
};
pub use types::{
    round_to_interval, BookLevel, BookSide, CriticalZone, Exchange, HeatmapData, HeatmapSummary,
    Interval, LiquidationCluster, LiquidationEvent, LiquidationLevel, LiquidationType,
    MarketSnapshot, OrderBookSnapshot, OrderType, PositionDistribution, PositionSummary, Side,
    Symbol, TimestampMS,
};
pub use validation::Validate;
