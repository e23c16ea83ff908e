//! Value Objects - Immutable, identity-less domain primitives

mod binary_state;
mod condition;
mod device_class;

pub use binary_state::BinaryState;
pub use condition::Condition;
pub use device_class::DeviceClass;
