// Integrity tunables
// Passed explicitly into every call; there are no module-level defaults to
// mutate, so per-patrol or per-deployment overrides stay a caller choice.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub min_interval_minutes: f64,
    pub max_speed_kmh: f64,
    pub min_repeat_minutes: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            min_interval_minutes: 10.0,
            max_speed_kmh: 100.0,
            min_repeat_minutes: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub min_rotation_minutes: f64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            min_rotation_minutes: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrityConfig {
    pub evaluator: EvaluatorConfig,
    pub token: TokenConfig,
}
