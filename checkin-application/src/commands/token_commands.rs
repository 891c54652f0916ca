use anyhow::anyhow;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info};

use checkin_domain::services::token_service;
use checkin_domain::utils::millis_to_utc;
use checkin_domain::{PatrolToken, QrPayload};

use crate::dtos::{TokenIssueResponse, TokenRefreshOutcome};
use crate::{AppError, AppState};

/// Mint the first token for a patrol point.
pub fn issue_patrol_token(state: &AppState, patrol_id: &str) -> Result<TokenIssueResponse, AppError> {
    let patrol_id = normalize_patrol_id(patrol_id)?;
    let token = token_service::issue(&patrol_id);
    state.metrics.record_token_issued();
    info!(patrol_id = %token.patrol_id, "issued patrol token");
    build_issue_response(token)
}

/// The Issued -> Stale -> Issued step: hand back a fresh token when the
/// current one is stale or missing, otherwise report it still valid.
/// Electing a single winner between racing refreshes is the caller's job;
/// this only decides whether rotation is due.
pub fn refresh_patrol_token(
    state: &AppState,
    patrol_id: &str,
    current: Option<PatrolToken>,
) -> Result<TokenRefreshOutcome, AppError> {
    let patrol_id = normalize_patrol_id(patrol_id)?;
    let window = state.config.token.min_rotation_minutes;
    match current {
        Some(existing)
            if !token_service::should_rotate(Some(existing.issued_at_ms), window) =>
        {
            Ok(TokenRefreshOutcome {
                rotated: false,
                token: build_issue_response(existing)?,
            })
        }
        _ => {
            let fresh = token_service::issue(&patrol_id);
            state.metrics.record_token_issued();
            info!(patrol_id = %patrol_id, "rotated patrol token");
            Ok(TokenRefreshOutcome {
                rotated: true,
                token: build_issue_response(fresh)?,
            })
        }
    }
}

/// Decode a scanned QR string. A malformed scan is a rejected check-in
/// attempt, not a system error.
pub fn decode_qr_payload(state: &AppState, raw: &str) -> Result<QrPayload, AppError> {
    match token_service::decode_payload(raw) {
        Some(payload) => {
            state.metrics.record_qr_decode(true);
            Ok(payload)
        }
        None => {
            state.metrics.record_qr_decode(false);
            debug!("rejected malformed qr payload");
            Err(AppError::BadRequest("malformed qr payload".to_string()))
        }
    }
}

fn normalize_patrol_id(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("patrol_id must not be empty".to_string()));
    }
    if trimmed.contains(token_service::QR_DELIMITER) {
        return Err(AppError::BadRequest(format!(
            "patrol_id must not contain '{}'",
            token_service::QR_DELIMITER
        )));
    }
    Ok(trimmed.to_string())
}

fn build_issue_response(token: PatrolToken) -> Result<TokenIssueResponse, AppError> {
    let issued_at = millis_to_utc(token.issued_at_ms)
        .format(&Rfc3339)
        .map_err(|err| AppError::Internal(anyhow!("failed to format issue time: {err}")))?;
    let qr_payload = token_service::encode_payload(&token.patrol_id, &token.token);
    Ok(TokenIssueResponse {
        patrol_id: token.patrol_id,
        token: token.token,
        qr_payload,
        issued_at_ms: token.issued_at_ms,
        issued_at,
    })
}
