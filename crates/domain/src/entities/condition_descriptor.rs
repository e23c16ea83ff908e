//! Sensor type registry
//!
//! Static display metadata for every supported condition. The table is
//! defined at compile time and never mutated.

use serde::Serialize;

use crate::errors::DomainError;
use crate::value_objects::{Condition, DeviceClass};

/// Display metadata for a condition's binary sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionDescriptor {
    /// The condition this descriptor belongs to
    pub condition: Condition,
    /// Human-readable name, e.g. "Raining"
    pub display_name: &'static str,
    /// Host device class
    pub device_class: DeviceClass,
    /// Icon shown while the condition holds
    pub icon_on: &'static str,
    /// Icon shown otherwise
    pub icon_off: &'static str,
}

impl ConditionDescriptor {
    /// Get the condition identifier
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.condition.as_str()
    }

    /// Pick the icon for a raw reading
    ///
    /// Only `Some(true)` selects `icon_on`; a missing reading counts as off.
    #[must_use]
    pub const fn icon(&self, reading: Option<bool>) -> &'static str {
        match reading {
            Some(true) => self.icon_on,
            Some(false) | None => self.icon_off,
        }
    }
}

const RAINING: ConditionDescriptor = ConditionDescriptor {
    condition: Condition::Raining,
    display_name: "Raining",
    device_class: DeviceClass::Moisture,
    icon_on: "mdi:water",
    icon_off: "mdi:water-off",
};

const FREEZING: ConditionDescriptor = ConditionDescriptor {
    condition: Condition::Freezing,
    display_name: "Freezing",
    device_class: DeviceClass::Cold,
    icon_on: "mdi:fridge",
    icon_off: "mdi:fridge-outline",
};

/// Get the descriptor of a known condition
#[must_use]
pub const fn descriptor_for(condition: Condition) -> &'static ConditionDescriptor {
    match condition {
        Condition::Raining => &RAINING,
        Condition::Freezing => &FREEZING,
    }
}

/// Look up a descriptor by condition identifier
///
/// # Errors
///
/// Returns `DomainError::UnknownCondition` if the identifier is not a
/// supported condition.
///
/// # Examples
///
/// ```
/// use domain::entities::descriptor;
///
/// let raining = descriptor("raining").expect("known condition");
/// assert_eq!(raining.display_name, "Raining");
/// assert_eq!(raining.icon_on, "mdi:water");
///
/// assert!(descriptor("hailing").is_err());
/// ```
pub fn descriptor(id: &str) -> Result<&'static ConditionDescriptor, DomainError> {
    id.parse::<Condition>().map(descriptor_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raining_descriptor() {
        let d = descriptor("raining").unwrap();
        assert_eq!(d.id(), "raining");
        assert_eq!(d.display_name, "Raining");
        assert_eq!(d.device_class, DeviceClass::Moisture);
        assert_eq!(d.icon_on, "mdi:water");
        assert_eq!(d.icon_off, "mdi:water-off");
    }

    #[test]
    fn freezing_descriptor() {
        let d = descriptor("freezing").unwrap();
        assert_eq!(d.id(), "freezing");
        assert_eq!(d.display_name, "Freezing");
        assert_eq!(d.device_class, DeviceClass::Cold);
        assert_eq!(d.icon_on, "mdi:fridge");
        assert_eq!(d.icon_off, "mdi:fridge-outline");
    }

    #[test]
    fn unknown_identifier_fails() {
        let err = descriptor("windy").unwrap_err();
        assert!(matches!(err, DomainError::UnknownCondition(ref id) if id == "windy"));
    }

    #[test]
    fn every_condition_has_its_own_descriptor() {
        for condition in Condition::all() {
            assert_eq!(descriptor_for(condition).condition, condition);
        }
    }

    #[test]
    fn icon_treats_missing_reading_as_off() {
        let d = descriptor_for(Condition::Freezing);
        assert_eq!(d.icon(Some(true)), "mdi:fridge");
        assert_eq!(d.icon(Some(false)), "mdi:fridge-outline");
        assert_eq!(d.icon(None), "mdi:fridge-outline");
    }
}
