// Check-in anomaly evaluator
// Three independent rules over (prior, candidate); a rule abstains whenever
// a required input is missing. Absence of history is never an anomaly.

use crate::entities::{AnomalySignal, AnomalyVerdict, CandidateCheckin, EvaluatorConfig, PriorCheckin};
use crate::utils::{current_millis, minutes_between};
use crate::value_objects::TimestampValue;

const MINUTES_PER_HOUR: f64 = 60.0;
const REPEAT_SCORE_WEIGHT: f64 = 80.0;

/// Evaluate `candidate` against the requester's most recent prior check-in
/// using the wall clock for timestamp fallback.
pub fn evaluate(
    prior: Option<&PriorCheckin>,
    candidate: &CandidateCheckin,
    config: &EvaluatorConfig,
) -> AnomalyVerdict {
    evaluate_at(prior, candidate, config, current_millis())
}

/// Deterministic core of `evaluate`. A candidate without a usable timestamp
/// is pinned to `now_ms` instead of being rejected; callers wanting strict
/// timestamp validation must apply it before calling.
pub fn evaluate_at(
    prior: Option<&PriorCheckin>,
    candidate: &CandidateCheckin,
    config: &EvaluatorConfig,
    now_ms: i64,
) -> AnomalyVerdict {
    let candidate_ms = candidate
        .timestamp
        .as_ref()
        .map(TimestampValue::to_millis)
        .unwrap_or(now_ms);
    let prior_ms = prior.and_then(|record| record.timestamp.as_ref().map(TimestampValue::to_millis));

    AnomalyVerdict::from_signals([
        interval_signal(prior_ms, candidate_ms, config),
        speed_signal(prior, prior_ms, candidate, candidate_ms, config),
        repeat_signal(prior, prior_ms, candidate, candidate_ms, config),
    ])
}

/// True when the evaluator would fall back to the current time for this
/// candidate. Exposed so the submission boundary can log the degradation.
pub fn uses_clock_fallback(candidate: &CandidateCheckin) -> bool {
    candidate.timestamp.is_none()
}

fn interval_signal(prior_ms: Option<i64>, candidate_ms: i64, config: &EvaluatorConfig) -> AnomalySignal {
    let Some(prior_ms) = prior_ms else {
        return AnomalySignal::clear();
    };
    let minimum = config.min_interval_minutes;
    let elapsed = minutes_between(prior_ms, candidate_ms);
    if !(minimum > 0.0) || elapsed >= minimum {
        return AnomalySignal::clear();
    }
    let score = (((1.0 - elapsed / minimum) * 100.0).floor()).min(100.0) as u32;
    AnomalySignal::flagged(
        format!(
            "check-in interval {} min is below the {} min minimum",
            elapsed.round() as i64,
            minimum
        ),
        score,
    )
}

fn speed_signal(
    prior: Option<&PriorCheckin>,
    prior_ms: Option<i64>,
    candidate: &CandidateCheckin,
    candidate_ms: i64,
    config: &EvaluatorConfig,
) -> AnomalySignal {
    let (Some(prior_ms), Some(from), Some(to)) = (
        prior_ms,
        prior.and_then(|record| record.location),
        candidate.location,
    ) else {
        return AnomalySignal::clear();
    };
    let hours = minutes_between(prior_ms, candidate_ms) / MINUTES_PER_HOUR;
    if hours <= 0.0 {
        // Zero or reversed elapsed time is inconclusive, not an anomaly.
        return AnomalySignal::clear();
    }
    let limit = config.max_speed_kmh;
    let speed_kmh = from.distance_meters(&to) / 1_000.0 / hours;
    if !(limit > 0.0) || speed_kmh <= limit {
        return AnomalySignal::clear();
    }
    let score = ((speed_kmh / limit * 50.0 + 50.0).floor()).min(100.0) as u32;
    AnomalySignal::flagged(
        format!(
            "implied travel speed {} km/h exceeds the {} km/h limit",
            speed_kmh.round() as i64,
            limit
        ),
        score,
    )
}

fn repeat_signal(
    prior: Option<&PriorCheckin>,
    prior_ms: Option<i64>,
    candidate: &CandidateCheckin,
    candidate_ms: i64,
    config: &EvaluatorConfig,
) -> AnomalySignal {
    let (Some(prior_ms), Some(prior_patrol), Some(candidate_patrol)) = (
        prior_ms,
        prior.and_then(|record| record.patrol_id.as_deref()),
        candidate.patrol_id.as_deref(),
    ) else {
        return AnomalySignal::clear();
    };
    if prior_patrol != candidate_patrol {
        return AnomalySignal::clear();
    }
    let minimum = config.min_repeat_minutes;
    let elapsed = minutes_between(prior_ms, candidate_ms);
    if !(minimum > 0.0) || elapsed >= minimum {
        return AnomalySignal::clear();
    }
    let score = ((1.0 - elapsed / minimum) * REPEAT_SCORE_WEIGHT).floor() as u32;
    AnomalySignal::flagged(
        format!(
            "repeat check-in at the same patrol point after {} min (minimum {} min)",
            elapsed.round() as i64,
            minimum
        ),
        score,
    )
}
