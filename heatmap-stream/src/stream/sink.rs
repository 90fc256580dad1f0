use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing;

use super::codec::decode;
use super::message::StreamMessage;
use crate::error::StreamError;

/// Write side of a stream transport
pub trait StreamSink {
    /// Append a message to `message.stream`, returning the id the
    /// transport assigned to it
    fn append(&mut self, message: StreamMessage) -> Result<String, StreamError>;
}

/// Read side of a stream transport
pub trait StreamSource {
    /// Messages of `stream` in append order, strictly after `after_id`
    /// when given
    fn read(&self, stream: &str, after_id: Option<&str>)
        -> Result<Vec<StreamMessage>, StreamError>;
}

/// Ordered in-process stream store.
///
/// Ids follow the `<millis>-<sequence>` form of Redis streams and are
/// strictly increasing across all streams of one store.
#[derive(Debug, Default)]
pub struct InMemoryStream {
    streams: HashMap<String, Vec<((i64, u64), StreamMessage)>>,
    last_id: (i64, u64),
}

impl InMemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self, stream: &str) -> usize {
        self.streams.get(stream).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.streams.values().all(Vec::is_empty)
    }

    pub fn stream_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.streams.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn next_id(&mut self, timestamp: i64) -> (i64, u64) {
        let (last_ms, last_seq) = self.last_id;
        self.last_id = if timestamp > last_ms {
            (timestamp, 0)
        } else {
            (last_ms, last_seq + 1)
        };
        self.last_id
    }
}

fn parse_id(id: &str) -> Result<(i64, u64), StreamError> {
    let (ms, seq) = id
        .split_once('-')
        .ok_or_else(|| StreamError::Sink(format!("malformed stream id {:?}", id)))?;
    let ms = ms
        .parse()
        .map_err(|_| StreamError::Sink(format!("malformed stream id {:?}", id)))?;
    let seq = seq
        .parse()
        .map_err(|_| StreamError::Sink(format!("malformed stream id {:?}", id)))?;
    Ok((ms, seq))
}

impl StreamSink for InMemoryStream {
    fn append(&mut self, mut message: StreamMessage) -> Result<String, StreamError> {
        if message.stream.is_empty() {
            return Err(StreamError::EmptyStreamName);
        }

        let key = self.next_id(message.timestamp);
        message.id = format!("{}-{}", key.0, key.1);
        let id = message.id.clone();

        self.streams
            .entry(message.stream.clone())
            .or_default()
            .push((key, message));
        Ok(id)
    }
}

impl StreamSource for InMemoryStream {
    fn read(
        &self,
        stream: &str,
        after_id: Option<&str>,
    ) -> Result<Vec<StreamMessage>, StreamError> {
        let after = after_id.map(parse_id).transpose()?;
        let Some(entries) = self.streams.get(stream) else {
            return Ok(Vec::new());
        };

        Ok(entries
            .iter()
            .filter(|(key, _)| after.map_or(true, |a| *key > a))
            .map(|(_, message)| message.clone())
            .collect())
    }
}

/// Decode every message of `stream` into `T`, failing on the first message
/// that does not fit.
pub fn read_records<T: DeserializeOwned>(
    source: &impl StreamSource,
    stream: &str,
) -> Result<Vec<T>, StreamError> {
    let messages = source.read(stream, None)?;
    tracing::debug!("Decoding {} messages from {}", messages.len(), stream);
    messages.iter().map(decode::<T>).collect()
}
