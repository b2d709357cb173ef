//! This module reimports commonly used types.

pub use crate::dispatch::{
    CLUSTER_RADIUS_KM, DispatchConfig, MAX_DELIVERIES_PER_DRIVER, assign_deliveries, dispatch_stats, group_by_driver,
    group_by_pincode,
};

pub use crate::models::{
    AssignedDelivery, DeliveryRecord, DeliveryStatus, DispatchStats, DriverAssignment, PincodeGroup, Priority,
};

pub use crate::session::DispatchSession;

pub use crate::utils::{Distance, Float, GenericError, GenericResult};
