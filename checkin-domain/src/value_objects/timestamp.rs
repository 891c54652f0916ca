// Timestamp value object
// Check-in clients report time as raw epoch millis, as a {seconds} object,
// or as an RFC 3339 instant; all three normalize through to_millis().

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampValue {
    Millis(i64),
    Seconds { seconds: i64 },
    Instant(DateTime<Utc>),
}

impl TimestampValue {
    pub fn to_millis(&self) -> i64 {
        match self {
            TimestampValue::Millis(ms) => *ms,
            TimestampValue::Seconds { seconds } => seconds.saturating_mul(1_000),
            TimestampValue::Instant(instant) => instant.timestamp_millis(),
        }
    }
}

impl From<i64> for TimestampValue {
    fn from(ms: i64) -> Self {
        TimestampValue::Millis(ms)
    }
}
