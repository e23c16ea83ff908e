//! Station observation
//!
//! The latest readings published by a weather station. Every field is
//! optional: a station that has not reported yet has no timestamp and no
//! readings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Condition;

/// Snapshot of a station's current readings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationObservation {
    /// When the station produced this observation
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Whether precipitation is detected
    #[serde(default)]
    pub raining: Option<bool>,
    /// Whether the air temperature is at or below freezing
    #[serde(default)]
    pub freezing: Option<bool>,
    /// Air temperature in Celsius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Precipitation rate in mm/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_rate: Option<f64>,
    /// Station display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
}

impl StationObservation {
    /// Create an empty observation (no reading yet)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an observation stamped at `timestamp`
    #[must_use]
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..Self::default()
        }
    }

    /// Set the reading for a condition
    #[must_use]
    pub fn with_condition(mut self, condition: Condition, value: Option<bool>) -> Self {
        match condition {
            Condition::Raining => self.raining = value,
            Condition::Freezing => self.freezing = value,
        }
        self
    }

    /// Read the value of a condition
    #[must_use]
    pub const fn condition(&self, condition: Condition) -> Option<bool> {
        match condition {
            Condition::Raining => self.raining,
            Condition::Freezing => self.freezing,
        }
    }

    /// Check whether the station has produced a reading
    #[must_use]
    pub const fn has_reading(&self) -> bool {
        self.timestamp.is_some()
    }
}
