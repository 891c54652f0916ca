// Check-in entities
// A candidate arrives with loosely-typed fields, the prior record is
// whatever the caller last persisted, and CheckinEvent is the normalized
// immutable record handed back for storage.

use serde::{Deserialize, Serialize};

use crate::value_objects::{CheckinMode, GeoPoint, TimestampValue};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateCheckin {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patrol_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<TimestampValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub mode: CheckinMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriorCheckin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patrol_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<TimestampValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinEvent {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patrol_id: Option<String>,
    pub timestamp_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub mode: CheckinMode,
}
