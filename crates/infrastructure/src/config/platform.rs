//! Binary sensor platform and observation source configurations.

use std::path::PathBuf;

use domain::Condition;
use serde::{Deserialize, Serialize};

// ==============================
// Binary Sensor Platform Configuration
// ==============================

/// Binary sensor platform configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySensorPlatformConfig {
    /// Condition ids to create sensors for (default: all conditions)
    #[serde(default = "default_monitored_conditions")]
    pub monitored_conditions: Vec<String>,

    /// Seconds between host refresh cycles
    #[serde(default = "default_scan_interval")]
    pub scan_interval_secs: u64,
}

fn default_monitored_conditions() -> Vec<String> {
    Condition::all()
        .iter()
        .map(|c| c.as_str().to_string())
        .collect()
}

const fn default_scan_interval() -> u64 {
    60
}

impl Default for BinarySensorPlatformConfig {
    fn default() -> Self {
        Self {
            monitored_conditions: default_monitored_conditions(),
            scan_interval_secs: default_scan_interval(),
        }
    }
}

impl BinarySensorPlatformConfig {
    /// Condition ids to set up; an empty list means every condition
    #[must_use]
    pub fn conditions(&self) -> Vec<String> {
        if self.monitored_conditions.is_empty() {
            default_monitored_conditions()
        } else {
            self.monitored_conditions.clone()
        }
    }
}

// ==============================
// Observation Source Configuration
// ==============================

/// Where the shared data holder reads station observations from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSourceConfig {
    /// JSON file holding the latest station observation
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_monitors_every_condition() {
        let config = BinarySensorPlatformConfig::default();
        assert_eq!(config.monitored_conditions, vec!["raining", "freezing"]);
        assert_eq!(config.scan_interval_secs, 60);
    }

    #[test]
    fn empty_list_means_every_condition() {
        let config = BinarySensorPlatformConfig {
            monitored_conditions: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.conditions(), vec!["raining", "freezing"]);
    }

    #[test]
    fn explicit_list_is_kept() {
        let config: BinarySensorPlatformConfig =
            serde_json::from_str(r#"{"monitored_conditions": ["freezing"]}"#).unwrap();
        assert_eq!(config.conditions(), vec!["freezing"]);
        assert_eq!(config.scan_interval_secs, 60);
    }

    #[test]
    fn observation_source_defaults_to_no_path() {
        assert!(ObservationSourceConfig::default().path.is_none());
    }
}
