pub mod codec;
pub mod keys;
pub mod message;
pub mod publisher;
pub mod record;
pub mod sink;

// Re-export commonly used items
pub use codec::{decode, encode};
pub use keys::{
    heatmap_cache_key, heatmap_stream_name, liquidation_stream_name, market_stream_name,
    orderbook_stream_name, position_stream_name, stream_name,
};
pub use message::StreamMessage;
pub use publisher::{PublishStats, Publisher};
pub use record::StreamRecord;
pub use sink::{read_records, InMemoryStream, StreamSink, StreamSource};
