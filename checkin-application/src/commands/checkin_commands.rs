use tracing::{info, warn};

use checkin_domain::services::evaluator;
use checkin_domain::utils::current_millis;
use checkin_domain::{CandidateCheckin, CheckinEvent, CheckinMode, GeoPoint, TimestampValue};

use crate::dtos::{CheckinOutcome, CheckinSubmission, PriorCheckinDto, VerdictDto};
use crate::{AppError, AppState};

/// Evaluate one candidate check-in against the requester's most recent
/// prior record and hand back the normalized event plus its audit verdict.
/// Persisting both, and serializing read-evaluate-write per user/patrol,
/// stays with the caller.
pub fn submit_checkin(
    state: &AppState,
    prior: Option<PriorCheckinDto>,
    submission: CheckinSubmission,
) -> Result<CheckinOutcome, AppError> {
    let user_id = normalize_required_text(submission.user_id, "user_id")?;
    let patrol_id = normalize_optional_text(submission.patrol_id);
    let location = normalize_location(submission.latitude, submission.longitude)?;
    let mode = submission
        .mode
        .as_deref()
        .map(CheckinMode::from)
        .unwrap_or(CheckinMode::Gps);

    let candidate = CandidateCheckin {
        user_id,
        patrol_id,
        timestamp: submission.timestamp,
        location,
        mode,
    };
    if evaluator::uses_clock_fallback(&candidate) {
        warn!(
            user_id = %candidate.user_id,
            "check-in has no usable timestamp, pinning it to the current time"
        );
    }

    let prior = prior.map(PriorCheckinDto::into_domain);
    let now_ms = current_millis();
    let verdict = evaluator::evaluate_at(prior.as_ref(), &candidate, &state.config.evaluator, now_ms);
    state.metrics.record_evaluation(verdict.anomaly);
    if verdict.anomaly {
        info!(
            user_id = %candidate.user_id,
            score = verdict.score,
            "check-in flagged: {}",
            verdict.reasons.join("; ")
        );
    }

    let timestamp_ms = candidate
        .timestamp
        .as_ref()
        .map(TimestampValue::to_millis)
        .unwrap_or(now_ms);
    let event = CheckinEvent {
        user_id: candidate.user_id,
        patrol_id: candidate.patrol_id,
        timestamp_ms,
        location: candidate.location,
        mode: candidate.mode,
    };
    Ok(CheckinOutcome {
        event,
        verdict: VerdictDto::from(verdict),
    })
}

fn normalize_required_text(value: String, field: &str) -> Result<String, AppError> {
    normalize_optional_text(Some(value))
        .ok_or_else(|| AppError::BadRequest(format!("{} must not be empty", field)))
}

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn normalize_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<GeoPoint>, AppError> {
    match (latitude, longitude) {
        (None, None) => Ok(None),
        (Some(latitude), Some(longitude)) => {
            if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
                return Err(AppError::BadRequest(format!(
                    "latitude {} out of range",
                    latitude
                )));
            }
            if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
                return Err(AppError::BadRequest(format!(
                    "longitude {} out of range",
                    longitude
                )));
            }
            Ok(Some(GeoPoint::new(latitude, longitude)))
        }
        _ => Err(AppError::BadRequest(
            "latitude and longitude must be supplied together".to_string(),
        )),
    }
}
