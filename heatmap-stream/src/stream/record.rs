use heatmap_core::{
    HeatmapData, LiquidationEvent, MarketSnapshot, OrderBookSnapshot, PositionDistribution,
    Validate,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::keys;

/// A domain record that knows which stream it is published on
pub trait StreamRecord: Serialize + DeserializeOwned + Validate {
    /// Data type segment of the stream key (e.g. "liquidations")
    const DATA_TYPE: &'static str;

    fn stream_key(&self) -> String;
}

impl StreamRecord for LiquidationEvent {
    const DATA_TYPE: &'static str = keys::LIQUIDATIONS;

    fn stream_key(&self) -> String {
        keys::liquidation_stream_name(self.exchange, &self.symbol)
    }
}

impl StreamRecord for MarketSnapshot {
    const DATA_TYPE: &'static str = keys::MARKET;

    fn stream_key(&self) -> String {
        keys::market_stream_name(self.exchange, &self.symbol)
    }
}

impl StreamRecord for OrderBookSnapshot {
    const DATA_TYPE: &'static str = keys::ORDERBOOK;

    fn stream_key(&self) -> String {
        keys::orderbook_stream_name(self.exchange, &self.symbol)
    }
}

impl StreamRecord for PositionDistribution {
    const DATA_TYPE: &'static str = keys::POSITIONS;

    fn stream_key(&self) -> String {
        keys::position_stream_name(self.exchange, &self.symbol)
    }
}

impl StreamRecord for HeatmapData {
    const DATA_TYPE: &'static str = keys::HEATMAP;

    fn stream_key(&self) -> String {
        keys::heatmap_stream_name(&self.symbol)
    }
}
