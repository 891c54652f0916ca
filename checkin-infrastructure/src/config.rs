use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::warn;

use checkin_domain::{EvaluatorConfig, IntegrityConfig, TokenConfig};

const CONFIG_PATH_ENV: &str = "WAYPOST_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub min_interval_minutes: f64,
    pub max_speed_kmh: f64,
    pub min_repeat_minutes: f64,
    pub min_rotation_minutes: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_interval_minutes: 10.0,
            max_speed_kmh: 100.0,
            min_repeat_minutes: 60.0,
            min_rotation_minutes: 15.0,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.validate()?;
            return Ok(config);
        }
        let content = std::fs::read_to_string(file_path)?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        apply_f64_override("WAYPOST_MIN_INTERVAL_MINUTES", &mut self.min_interval_minutes);
        apply_f64_override("WAYPOST_MAX_SPEED_KMH", &mut self.max_speed_kmh);
        apply_f64_override("WAYPOST_MIN_REPEAT_MINUTES", &mut self.min_repeat_minutes);
        apply_f64_override("WAYPOST_MIN_ROTATION_MINUTES", &mut self.min_rotation_minutes);
    }

    pub fn validate(&self) -> Result<()> {
        validate_tunable("min_interval_minutes", self.min_interval_minutes)?;
        validate_tunable("max_speed_kmh", self.max_speed_kmh)?;
        validate_tunable("min_repeat_minutes", self.min_repeat_minutes)?;
        validate_tunable("min_rotation_minutes", self.min_rotation_minutes)?;
        Ok(())
    }

    pub fn to_integrity_config(&self) -> IntegrityConfig {
        IntegrityConfig {
            evaluator: EvaluatorConfig {
                min_interval_minutes: self.min_interval_minutes,
                max_speed_kmh: self.max_speed_kmh,
                min_repeat_minutes: self.min_repeat_minutes,
            },
            token: TokenConfig {
                min_rotation_minutes: self.min_rotation_minutes,
            },
        }
    }
}

fn apply_f64_override(key: &str, target: &mut f64) {
    if let Ok(raw) = env::var(key) {
        match raw.trim().parse::<f64>() {
            Ok(value) => *target = value,
            Err(_) => warn!("ignoring non-numeric {} override: {}", key, raw),
        }
    }
}

fn validate_tunable(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(anyhow!("{} must be a positive number, got {}", name, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_tunables() {
        let config = AppConfig::default();
        assert_eq!(config.min_interval_minutes, 10.0);
        assert_eq!(config.max_speed_kmh, 100.0);
        assert_eq!(config.min_repeat_minutes, 60.0);
        assert_eq!(config.min_rotation_minutes, 15.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config: AppConfig =
            toml::from_str("max_speed_kmh = 120.0\nmin_rotation_minutes = 5.0").expect("parse");
        assert_eq!(config.max_speed_kmh, 120.0);
        assert_eq!(config.min_rotation_minutes, 5.0);
        assert_eq!(config.min_interval_minutes, 10.0);
        assert_eq!(config.min_repeat_minutes, 60.0);
    }

    #[test]
    fn non_positive_tunables_fail_validation() {
        let mut config = AppConfig::default();
        config.max_speed_kmh = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.min_interval_minutes = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn projects_into_domain_config() {
        let mut config = AppConfig::default();
        config.min_repeat_minutes = 30.0;
        let integrity = config.to_integrity_config();
        assert_eq!(integrity.evaluator.min_repeat_minutes, 30.0);
        assert_eq!(integrity.token.min_rotation_minutes, 15.0);
    }
}
