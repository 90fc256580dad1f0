use crate::error::ModelError;
use crate::types::TimestampMS;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation interval for heatmap buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1s")]
    OneSecond,
    #[default]
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl Interval {
    pub const ALL: [Interval; 7] = [
        Interval::OneSecond,
        Interval::OneMinute,
        Interval::FiveMinutes,
        Interval::FifteenMinutes,
        Interval::OneHour,
        Interval::FourHours,
        Interval::OneDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneSecond => "1s",
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::OneHour => "1h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Interval::OneSecond => Duration::seconds(1),
            Interval::OneMinute => Duration::minutes(1),
            Interval::FiveMinutes => Duration::minutes(5),
            Interval::FifteenMinutes => Duration::minutes(15),
            Interval::OneHour => Duration::hours(1),
            Interval::FourHours => Duration::hours(4),
            Interval::OneDay => Duration::days(1),
        }
    }

    /// Resolve an interval name, falling back to one minute for anything
    /// unrecognized.
    pub fn lookup(name: &str) -> Interval {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!("Unrecognized interval {:?}, using 1m", name);
            Interval::OneMinute
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: "interval",
                value: s.to_string(),
            })
    }
}

/// Truncate a timestamp down to the start of its interval bucket.
///
/// Buckets are aligned to the Unix epoch, so minute, hour and day buckets
/// start on UTC boundaries. Timestamps before the epoch floor as well.
/// Near `i64::MIN`, where the bucket start is not representable, the
/// result saturates at `i64::MIN`.
pub fn round_to_interval(timestamp: TimestampMS, interval: Interval) -> TimestampMS {
    let bucket_ms = interval.duration().num_milliseconds();
    timestamp.saturating_sub(timestamp.rem_euclid(bucket_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ms(h: u32, m: u32, s: u32, milli: u32) -> TimestampMS {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap().timestamp_millis() + milli as i64
    }

    #[test]
    fn test_interval_durations() {
        assert_eq!(Interval::OneSecond.duration(), Duration::seconds(1));
        assert_eq!(Interval::OneMinute.duration(), Duration::minutes(1));
        assert_eq!(Interval::FiveMinutes.duration(), Duration::minutes(5));
        assert_eq!(Interval::OneHour.duration(), Duration::hours(1));
        assert_eq!(Interval::FourHours.duration(), Duration::hours(4));
        assert_eq!(Interval::OneDay.duration(), Duration::hours(24));
    }

    #[test]
    fn test_unknown_interval_defaults_to_minute() {
        assert_eq!(Interval::lookup("unknown"), Interval::OneMinute);
        assert_eq!(Interval::lookup("unknown").duration(), Duration::minutes(1));
        assert_eq!(Interval::lookup("15m"), Interval::FifteenMinutes);
    }

    #[test]
    fn test_round_to_interval() {
        let ts = ms(12, 34, 56, 789);

        assert_eq!(round_to_interval(ts, Interval::OneSecond), ms(12, 34, 56, 0));
        assert_eq!(round_to_interval(ts, Interval::OneMinute), ms(12, 34, 0, 0));
        assert_eq!(round_to_interval(ts, Interval::FiveMinutes), ms(12, 30, 0, 0));
        assert_eq!(round_to_interval(ts, Interval::FifteenMinutes), ms(12, 30, 0, 0));
        assert_eq!(round_to_interval(ts, Interval::OneHour), ms(12, 0, 0, 0));
        assert_eq!(round_to_interval(ts, Interval::FourHours), ms(12, 0, 0, 0));
        assert_eq!(round_to_interval(ts, Interval::OneDay), ms(0, 0, 0, 0));
        assert_eq!(
            round_to_interval(ts, Interval::lookup("3w")),
            ms(12, 34, 0, 0)
        );
    }

    #[test]
    fn test_round_is_idempotent_on_boundaries() {
        let boundary = ms(12, 30, 0, 0);
        assert_eq!(round_to_interval(boundary, Interval::FiveMinutes), boundary);
        assert_eq!(round_to_interval(-1, Interval::OneSecond), -1000);
    }

    #[test]
    fn test_round_saturates_at_extremes() {
        assert_eq!(round_to_interval(i64::MIN, Interval::OneMinute), i64::MIN);
        assert_eq!(round_to_interval(i64::MIN + 1, Interval::OneDay), i64::MIN);

        let rounded = round_to_interval(i64::MAX, Interval::OneMinute);
        assert!(rounded <= i64::MAX);
        assert_eq!(rounded % 60_000, 0);
    }

    #[test]
    fn test_interval_wire_names() {
        assert_eq!(serde_json::to_string(&Interval::FifteenMinutes).unwrap(), "\"15m\"");
        let interval: Interval = serde_json::from_str("\"4h\"").unwrap();
        assert_eq!(interval, Interval::FourHours);
    }
}
