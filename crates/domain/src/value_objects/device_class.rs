//! Binary sensor device class

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category the host uses to render a binary sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Wet/dry
    Moisture,
    /// Cold/normal
    Cold,
}

impl DeviceClass {
    /// Get the device class identifier understood by the host
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Moisture => "moisture",
            Self::Cold => "cold",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(DeviceClass::Moisture.to_string(), "moisture");
        assert_eq!(DeviceClass::Cold.to_string(), "cold");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DeviceClass::Cold).unwrap(),
            "\"cold\""
        );
    }
}
