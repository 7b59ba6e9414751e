use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rainfall above which the alert level escalates to red.
pub const RED_ALERT_RAINFALL_MM: f64 = 150.0;

/// Regional weather alert level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    Green,
    #[default]
    Yellow,
    Red,
}

impl AlertLevel {
    /// Alert level implied by the current rainfall reading.
    pub fn for_rainfall(rainfall_mm: f64) -> Self {
        if rainfall_mm > RED_ALERT_RAINFALL_MM {
            AlertLevel::Red
        } else {
            AlertLevel::Yellow
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            AlertLevel::Green => "GREEN",
            AlertLevel::Yellow => "YELLOW",
            AlertLevel::Red => "RED",
        };
        f.write_str(value)
    }
}

impl FromStr for AlertLevel {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_uppercase().as_str() {
            "GREEN" => Ok(AlertLevel::Green),
            "YELLOW" => Ok(AlertLevel::Yellow),
            "RED" => Ok(AlertLevel::Red),
            other => Err(Error::InvalidWeather {
                message: format!("unknown alert level {other}"),
            }),
        }
    }
}

/// Weather conditions supplied with every route computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub rainfall_mm: f64,
    #[serde(rename = "rainfall7DayAvg")]
    pub rainfall_7day_avg: f64,
    pub alert_level: AlertLevel,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            rainfall_mm: 45.0,
            rainfall_7day_avg: 30.0,
            alert_level: AlertLevel::Yellow,
        }
    }
}

impl WeatherSnapshot {
    /// Snapshot for a rainfall reading, deriving the alert level from it.
    pub fn from_rainfall(rainfall_mm: f64) -> Self {
        Self {
            rainfall_mm,
            rainfall_7day_avg: rainfall_mm,
            alert_level: AlertLevel::for_rainfall(rainfall_mm),
        }
    }

    /// Factor by which current rainfall amplifies landslide and flood hazard.
    pub fn hazard_multiplier(&self) -> f64 {
        1.0 + self.rainfall_mm / 100.0
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rainfall_mm.is_finite() || self.rainfall_mm < 0.0 {
            return Err(Error::InvalidWeather {
                message: "rainfallMm must be finite and non-negative".to_string(),
            });
        }
        if !self.rainfall_7day_avg.is_finite() || self.rainfall_7day_avg < 0.0 {
            return Err(Error::InvalidWeather {
                message: "rainfall7DayAvg must be finite and non-negative".to_string(),
            });
        }
        Ok(())
    }
}
