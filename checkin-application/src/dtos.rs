// Boundary DTOs for the check-in submission workflow

use serde::{Deserialize, Serialize};

use checkin_domain::{AnomalyVerdict, CheckinEvent, PriorCheckin, TimestampValue};

#[derive(Debug, Clone, Deserialize)]
pub struct CheckinSubmission {
    pub user_id: String,
    #[serde(default)]
    pub patrol_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<TimestampValue>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriorCheckinDto {
    #[serde(default)]
    pub patrol_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<TimestampValue>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl PriorCheckinDto {
    /// History is evidence, not input to validate: a half-supplied prior
    /// coordinate pair degrades to "no location" instead of erroring.
    pub fn into_domain(self) -> PriorCheckin {
        let location = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => {
                Some(checkin_domain::GeoPoint::new(latitude, longitude))
            }
            _ => None,
        };
        PriorCheckin {
            patrol_id: self.patrol_id,
            timestamp: self.timestamp,
            location,
        }
    }
}

/// The audit payload attached to a stored check-in record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictDto {
    pub anomaly: bool,
    pub anomaly_reasons: Vec<String>,
    pub anomaly_score: u32,
}

impl From<AnomalyVerdict> for VerdictDto {
    fn from(verdict: AnomalyVerdict) -> Self {
        Self {
            anomaly: verdict.anomaly,
            anomaly_reasons: verdict.reasons,
            anomaly_score: verdict.score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckinOutcome {
    #[serde(flatten)]
    pub event: CheckinEvent,
    #[serde(flatten)]
    pub verdict: VerdictDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenIssueResponse {
    pub patrol_id: String,
    pub token: String,
    pub qr_payload: String,
    pub issued_at_ms: i64,
    pub issued_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenRefreshOutcome {
    pub rotated: bool,
    pub token: TokenIssueResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_serializes_with_audit_field_names() {
        let dto = VerdictDto {
            anomaly: true,
            anomaly_reasons: vec!["too fast".to_string()],
            anomaly_score: 72,
        };
        let json = serde_json::to_value(&dto).expect("serialize verdict");
        assert_eq!(json["anomaly"], true);
        assert_eq!(json["anomalyReasons"][0], "too fast");
        assert_eq!(json["anomalyScore"], 72);
    }

    #[test]
    fn half_supplied_prior_coordinates_degrade_to_none() {
        let dto = PriorCheckinDto {
            latitude: Some(25.0),
            ..PriorCheckinDto::default()
        };
        assert!(dto.into_domain().location.is_none());
    }
}
