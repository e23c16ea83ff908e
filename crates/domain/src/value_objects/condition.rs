//! Weather condition value object
//!
//! The boolean weather facts a station can report. Each condition is backed
//! by one binary sensor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A named boolean weather fact
///
/// # Examples
///
/// ```
/// use domain::value_objects::Condition;
///
/// let condition: Condition = "raining".parse().expect("known condition");
/// assert_eq!(condition, Condition::Raining);
/// assert_eq!(condition.as_str(), "raining");
///
/// assert!("hailing".parse::<Condition>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Precipitation is currently detected
    Raining,
    /// Air temperature is at or below freezing
    Freezing,
}

impl Condition {
    /// Get the condition identifier used in configuration
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Raining => "raining",
            Self::Freezing => "freezing",
        }
    }

    /// Get all supported conditions in registry order
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Raining, Self::Freezing]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raining" => Ok(Self::Raining),
            "freezing" => Ok(Self::Freezing),
            other => Err(DomainError::unknown_condition(other)),
        }
    }
}

impl TryFrom<&str> for Condition {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
