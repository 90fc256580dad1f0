pub mod error;
pub mod stream;

// Re-export commonly used items
pub use error::StreamError;
pub use stream::{
    decode, encode, heatmap_cache_key, heatmap_stream_name, liquidation_stream_name,
    market_stream_name, orderbook_stream_name, position_stream_name, read_records, stream_name,
    InMemoryStream, PublishStats, Publisher, StreamMessage, StreamRecord, StreamSink,
    StreamSource,
};
