// Check-in mode value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckinMode {
    Gps,
    Qr,
}

impl CheckinMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckinMode::Gps => "gps",
            CheckinMode::Qr => "qr",
        }
    }
}

impl From<&str> for CheckinMode {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "qr" => CheckinMode::Qr,
            _ => CheckinMode::Gps,
        }
    }
}
