// Patrol token entities
// A token is superseded, never updated: rotation builds a new PatrolToken
// and the old value stops matching the instant the new one is persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatrolToken {
    pub patrol_id: String,
    pub token: String,
    pub issued_at_ms: i64,
}

/// The decoded form of a scanned QR string. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    pub patrol_id: String,
    pub token: String,
}
