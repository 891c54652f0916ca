// Patrol token manager
// Tokens are pure random material: a v4 UUID plus an independent OsRng
// suffix, so no prior token or issue time helps predict the next one.

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

use crate::entities::{PatrolToken, QrPayload};
use crate::utils::{current_millis, minutes_between};

const QR_TAG: &str = "PATROL";
pub const QR_DELIMITER: char = ':';
const TOKEN_SUFFIX_BYTES: usize = 4;

/// Opaque, non-sequential token value with at least 128 bits of entropy.
pub fn generate_token() -> String {
    let mut suffix = [0u8; TOKEN_SUFFIX_BYTES];
    OsRng.fill_bytes(&mut suffix);
    let mut token = Uuid::new_v4().simple().to_string();
    for byte in suffix {
        token.push_str(&format!("{byte:02x}"));
    }
    token
}

/// Build the QR wire string `PATROL:<patrol_id>:<token>`. Neither input may
/// contain the delimiter; enforcing that is the caller's obligation.
pub fn encode_payload(patrol_id: &str, token: &str) -> String {
    format!("{QR_TAG}{QR_DELIMITER}{patrol_id}{QR_DELIMITER}{token}")
}

/// Total decoder for scanned payloads: exactly three delimited fields with
/// the literal tag, or `None`. Never an error.
pub fn decode_payload(raw: &str) -> Option<QrPayload> {
    let fields: Vec<&str> = raw.split(QR_DELIMITER).collect();
    if fields.len() != 3 || fields[0] != QR_TAG {
        return None;
    }
    Some(QrPayload {
        patrol_id: fields[1].to_string(),
        token: fields[2].to_string(),
    })
}

/// True when the token is stale enough to replace. A missing issue time
/// forces rotation: fail open to freshness, not to staleness.
pub fn should_rotate(issued_at_ms: Option<i64>, min_rotation_minutes: f64) -> bool {
    should_rotate_at(issued_at_ms, min_rotation_minutes, current_millis())
}

pub fn should_rotate_at(issued_at_ms: Option<i64>, min_rotation_minutes: f64, now_ms: i64) -> bool {
    let Some(issued_at_ms) = issued_at_ms else {
        return true;
    };
    minutes_between(issued_at_ms, now_ms) >= min_rotation_minutes
}

/// Mint a fresh token for a patrol point (the Issued state).
pub fn issue(patrol_id: &str) -> PatrolToken {
    issue_at(patrol_id, current_millis())
}

pub fn issue_at(patrol_id: &str, now_ms: i64) -> PatrolToken {
    PatrolToken {
        patrol_id: patrol_id.to_string(),
        token: generate_token(),
        issued_at_ms: now_ms,
    }
}

/// Supersede `current` with a fresh token for the same patrol point. The
/// prior value stops being comparable the moment the caller persists this.
pub fn rotate(current: &PatrolToken) -> PatrolToken {
    issue(&current.patrol_id)
}
