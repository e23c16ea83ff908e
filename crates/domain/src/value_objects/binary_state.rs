//! Binary sensor state value object
//!
//! A binary sensor is on, off, or unknown when its data holder has not
//! produced a value yet.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::BinaryState;
//!
//! assert_eq!(BinaryState::from(Some(true)), BinaryState::On);
//! assert_eq!(BinaryState::from(Some(false)), BinaryState::Off);
//! assert_eq!(BinaryState::from(None), BinaryState::Unknown);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// State reported by a binary sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryState {
    /// The condition holds
    On,
    /// The condition does not hold
    Off,
    /// No reading available
    #[default]
    Unknown,
}

impl BinaryState {
    /// Check if the state is `On`
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Check if the state is known
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Convert back to an optional boolean
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::On => Some(true),
            Self::Off => Some(false),
            Self::Unknown => None,
        }
    }

    /// Get the state string the host displays
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Unknown => "unknown",
        }
    }
}

impl From<Option<bool>> for BinaryState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::On,
            Some(false) => Self::Off,
            None => Self::Unknown,
        }
    }
}

impl From<bool> for BinaryState {
    fn from(value: bool) -> Self {
        Self::from(Some(value))
    }
}

impl fmt::Display for BinaryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option() {
        assert_eq!(BinaryState::from(Some(true)), BinaryState::On);
        assert_eq!(BinaryState::from(Some(false)), BinaryState::Off);
        assert_eq!(BinaryState::from(None), BinaryState::Unknown);
    }

    #[test]
    fn unknown_is_neither_on_nor_known() {
        assert!(!BinaryState::Unknown.is_on());
        assert!(!BinaryState::Unknown.is_known());
        assert!(BinaryState::Off.is_known());
    }

    #[test]
    fn as_bool_inverts_from() {
        for value in [Some(true), Some(false), None] {
            assert_eq!(BinaryState::from(value).as_bool(), value);
        }
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(BinaryState::default(), BinaryState::Unknown);
    }

    #[test]
    fn display() {
        assert_eq!(BinaryState::On.to_string(), "on");
        assert_eq!(BinaryState::Unknown.to_string(), "unknown");
    }
}
