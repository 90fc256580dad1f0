pub mod heatmap;
pub mod interval;
pub mod liquidation;
pub mod market_snapshot;
pub mod order_book;
pub mod position;
pub mod vocabulary;

// Re-export common types
pub use heatmap::{CriticalZone, HeatmapData, HeatmapSummary, LiquidationCluster, LiquidationLevel};
pub use interval::{round_to_interval, Interval};
pub use liquidation::LiquidationEvent;
pub use market_snapshot::MarketSnapshot;
pub use order_book::{BookLevel, BookSide, OrderBookSnapshot};
pub use position::{PositionDistribution, PositionSummary};
pub use vocabulary::{Exchange, LiquidationType, OrderType, Side, Symbol};

/// Timestamp in milliseconds since Unix epoch
pub type TimestampMS = i64;
