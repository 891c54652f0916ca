// Anomaly signal and verdict entities

use serde::{Deserialize, Serialize};

pub const MAX_ANOMALY_SCORE: u32 = 100;

/// One rule's independent judgment about a single check-in event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalySignal {
    pub is_anomaly: bool,
    pub reason: Option<String>,
    pub score: u32,
}

impl AnomalySignal {
    pub fn clear() -> Self {
        Self {
            is_anomaly: false,
            reason: None,
            score: 0,
        }
    }

    pub fn flagged(reason: String, score: u32) -> Self {
        Self {
            is_anomaly: true,
            reason: Some(reason),
            score,
        }
    }
}

/// The merged result of all signals for one event. Attached to the stored
/// check-in as an audit annotation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyVerdict {
    pub anomaly: bool,
    pub reasons: Vec<String>,
    pub score: u32,
}

impl AnomalyVerdict {
    /// Merge signals in the order given. Scores are additive evidence of
    /// suspicion, not probabilities; the sum is capped at 100.
    pub fn from_signals<I>(signals: I) -> Self
    where
        I: IntoIterator<Item = AnomalySignal>,
    {
        let mut reasons = Vec::new();
        let mut score: u32 = 0;
        for signal in signals {
            if !signal.is_anomaly {
                continue;
            }
            if let Some(reason) = signal.reason {
                reasons.push(reason);
            }
            score = score.saturating_add(signal.score);
        }
        Self {
            anomaly: !reasons.is_empty(),
            reasons,
            score: score.min(MAX_ANOMALY_SCORE),
        }
    }

    pub fn clean() -> Self {
        Self {
            anomaly: false,
            reasons: Vec::new(),
            score: 0,
        }
    }
}
