//! Stream and cache key naming shared by every service in the pipeline.
//!
//! Formatting only: keys are not validated, so an empty symbol simply
//! yields a key with an empty segment.

use heatmap_core::{Exchange, Interval, Symbol};

pub const LIQUIDATIONS: &str = "liquidations";
pub const MARKET: &str = "market";
pub const ORDERBOOK: &str = "orderbook";
pub const POSITIONS: &str = "positions";
pub const HEATMAP: &str = "heatmap";

/// `<data_type>:<exchange>:<symbol>`
pub fn stream_name(data_type: &str, exchange: Exchange, symbol: &Symbol) -> String {
    format!("{}:{}:{}", data_type, exchange, symbol)
}

pub fn liquidation_stream_name(exchange: Exchange, symbol: &Symbol) -> String {
    stream_name(LIQUIDATIONS, exchange, symbol)
}

pub fn market_stream_name(exchange: Exchange, symbol: &Symbol) -> String {
    stream_name(MARKET, exchange, symbol)
}

pub fn orderbook_stream_name(exchange: Exchange, symbol: &Symbol) -> String {
    stream_name(ORDERBOOK, exchange, symbol)
}

pub fn position_stream_name(exchange: Exchange, symbol: &Symbol) -> String {
    stream_name(POSITIONS, exchange, symbol)
}

pub fn heatmap_stream_name(symbol: &Symbol) -> String {
    format!("{}:{}", HEATMAP, symbol)
}

pub fn heatmap_cache_key(symbol: &Symbol, interval: Interval) -> String {
    format!("{}:cache:{}:{}", HEATMAP, symbol, interval)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_name_generation() {
        assert_eq!(
            liquidation_stream_name(Exchange::Binance, &Symbol::BTCUSDT),
            "liquidations:binance:BTCUSDT"
        );
        assert_eq!(
            market_stream_name(Exchange::Okx, &Symbol::ETHUSDT),
            "market:okx:ETHUSDT"
        );
        assert_eq!(
            orderbook_stream_name(Exchange::Bybit, &Symbol::BNBUSDT),
            "orderbook:bybit:BNBUSDT"
        );
        assert_eq!(
            position_stream_name(Exchange::Deribit, &Symbol::BTCUSD),
            "positions:deribit:BTCUSD"
        );
        assert_eq!(heatmap_stream_name(&Symbol::BTCUSDT), "heatmap:BTCUSDT");
        assert_eq!(
            heatmap_cache_key(&Symbol::BTCUSDT, Interval::OneMinute),
            "heatmap:cache:BTCUSDT:1m"
        );
    }

    #[test]
    fn test_malformed_input_still_formats() {
        assert_eq!(
            liquidation_stream_name(Exchange::Kraken, &Symbol::new("")),
            "liquidations:kraken:"
        );
        assert_eq!(heatmap_stream_name(&Symbol::new("BTC:USDT")), "heatmap:BTC:USDT");
    }
}
