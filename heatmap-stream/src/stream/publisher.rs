use heatmap_core::Validate;
use serde::Serialize;
use tracing;

use super::codec::encode;
use super::record::StreamRecord;
use super::sink::StreamSink;
use crate::error::StreamError;

/// Counters from a publisher's lifetime
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PublishStats {
    pub published: usize,
    pub rejected: usize,
}

/// Validates, encodes and appends records to a sink.
///
/// Invalid records are rejected before encoding and never reach the sink.
pub struct Publisher<S> {
    sink: S,
    stats: PublishStats,
}

impl<S: StreamSink> Publisher<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            stats: PublishStats::default(),
        }
    }

    /// Publish on the record's own stream, returning the assigned id
    pub fn publish<R: StreamRecord>(&mut self, record: &R) -> Result<String, StreamError> {
        let stream = record.stream_key();
        self.publish_to(&stream, record)
    }

    /// Publish on an explicit stream, e.g. a heatmap cache key
    pub fn publish_to<R: Serialize + Validate>(
        &mut self,
        stream: &str,
        record: &R,
    ) -> Result<String, StreamError> {
        if let Err(e) = record.validate() {
            self.stats.rejected += 1;
            tracing::warn!("Rejected record for {}: {}", stream, e);
            return Err(e.into());
        }

        let message = encode(stream, record)?;
        let id = self.sink.append(message)?;
        self.stats.published += 1;

        tracing::debug!("Published {} to {}", id, stream);
        Ok(id)
    }

    pub fn stats(&self) -> &PublishStats {
        &self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::sink::{InMemoryStream, StreamSource};
    use heatmap_core::{Exchange, MarketSnapshot, ModelError, Symbol};

    #[test]
    fn test_publish_routes_by_record() {
        let mut publisher = Publisher::new(InMemoryStream::new());
        let snapshot = MarketSnapshot::new(Exchange::Binance, Symbol::BTCUSDT, 1000000, 45000.0);

        let id = publisher.publish(&snapshot).unwrap();
        assert!(!id.is_empty());
        assert_eq!(publisher.sink().len("market:binance:BTCUSDT"), 1);
        assert_eq!(publisher.stats().published, 1);
    }

    #[test]
    fn test_invalid_record_never_reaches_sink() {
        let mut publisher = Publisher::new(InMemoryStream::new());
        let snapshot = MarketSnapshot::new(Exchange::Binance, Symbol::BTCUSDT, 1000000, 0.0);

        match publisher.publish(&snapshot) {
            Err(StreamError::Validation(ModelError::Validation { field, .. })) => {
                assert_eq!(field, "mark_price")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(publisher.stats().rejected, 1);

        let store = publisher.into_inner();
        assert!(store.is_empty());
        assert!(store.read("market:binance:BTCUSDT", None).unwrap().is_empty());
    }
}
