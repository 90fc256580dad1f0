use anyhow::{Context, Result};
use heatmap_stream::{
    decode, encode, heatmap_cache_key, heatmap_stream_name, liquidation_stream_name,
    market_stream_name, orderbook_stream_name, position_stream_name, StreamMessage, StreamRecord,
};
use serde_json::Value;

use crate::config::ToolsConfig;

/// Every stream and cache key for the configured pair
pub fn keys(config: &ToolsConfig) -> Vec<String> {
    vec![
        liquidation_stream_name(config.exchange, &config.symbol),
        market_stream_name(config.exchange, &config.symbol),
        orderbook_stream_name(config.exchange, &config.symbol),
        position_stream_name(config.exchange, &config.symbol),
        heatmap_stream_name(&config.symbol),
        heatmap_cache_key(&config.symbol, config.interval),
    ]
}

/// Parse a record from JSON, validate it and flatten it into a stream
/// message. Uses the record's own stream unless `stream` is given.
pub fn encode_record<R: StreamRecord>(input: &str, stream: Option<&str>) -> Result<StreamMessage> {
    let record: R = serde_json::from_str(input).context("Failed to parse record JSON")?;
    record.validate()?;

    let stream = stream.map_or_else(|| record.stream_key(), str::to_string);
    tracing::debug!("Encoding record for {}", stream);
    Ok(encode(&stream, &record)?)
}

/// Parse a stream message from JSON, rebuild the record and validate it
pub fn decode_record<R: StreamRecord>(input: &str) -> Result<Value> {
    let message: StreamMessage =
        serde_json::from_str(input).context("Failed to parse stream message JSON")?;
    let record: R = decode(&message)
        .with_context(|| format!("Message {:?} does not hold this record type", message.id))?;
    record.validate()?;

    Ok(serde_json::to_value(&record)?)
}
