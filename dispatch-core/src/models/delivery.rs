#[cfg(test)]
#[path = "../../tests/unit/models/delivery_test.rs"]
mod delivery_test;

use crate::utils::Float;
use std::fmt;

/// Represents a delivery priority tier. A lower rank is assigned earlier within a run.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Priority {
    /// A delivery which has to be served first.
    High,
    /// A regular delivery. Used when priority is absent or unrecognized.
    #[default]
    Medium,
    /// A delivery which can wait for the others.
    Low,
}

impl Priority {
    /// Returns an ordering rank of the tier: the lower the value, the sooner the delivery is assigned.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Represents a delivery lifecycle status. The assignment engine never changes it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DeliveryStatus {
    /// A delivery waiting to be served.
    #[default]
    Pending,
    /// A delivery currently on the road.
    InProgress,
    /// A completed delivery.
    Delivered,
    /// A delivery which could not be completed.
    Failed,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeliveryStatus::Pending => write!(f, "Pending"),
            DeliveryStatus::InProgress => write!(f, "In Progress"),
            DeliveryStatus::Delivered => write!(f, "Delivered"),
            DeliveryStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Represents a single delivery request parsed from external input. Immutable once created:
/// the engine only reads it and attaches run identity on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeliveryRecord {
    /// A destination address.
    pub address: String,
    /// A customer identifier.
    pub customer_id: String,
    /// A postal code, treated as an opaque string.
    pub pincode: String,
    /// A cylinder type category.
    pub cylinder_type: String,
    /// A priority tier.
    pub priority: Priority,
    /// A latitude in degrees, when known.
    pub latitude: Option<Float>,
    /// A longitude in degrees, when known.
    pub longitude: Option<Float>,
    /// A lifecycle status.
    pub status: DeliveryStatus,
}

impl DeliveryRecord {
    /// Returns a (lat, lng) pair when both coordinates are present.
    pub fn coordinates(&self) -> Option<(Float, Float)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}
