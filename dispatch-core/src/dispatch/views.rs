//! Derived reporting views over an assignment run. Views own no state and are recomputed on
//! demand from the current set of assigned deliveries.

#[cfg(test)]
#[path = "../../tests/unit/dispatch/views_test.rs"]
mod views_test;

use crate::models::{AssignedDelivery, DispatchStats, DriverAssignment, PincodeGroup};
use rustc_hash::FxHashMap;

/// Groups assigned deliveries by driver, accumulating counts and records in first-seen order
/// per driver, then sorts the result lexicographically by driver label. The label is compared
/// as a plain string, so "Driver 10" comes before "Driver 2" - the established display order.
pub fn group_by_driver(assigned: &[AssignedDelivery]) -> Vec<DriverAssignment> {
    let mut slots = FxHashMap::default();
    let mut groups: Vec<DriverAssignment> = Vec::new();

    for delivery in assigned {
        let slot = *slots.entry(delivery.driver.clone()).or_insert_with(|| {
            groups.push(DriverAssignment {
                driver: delivery.driver.clone(),
                vehicle: delivery.vehicle.clone(),
                delivery_count: 0,
                deliveries: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].deliveries.push(delivery.clone());
        groups[slot].delivery_count += 1;
    }

    groups.sort_by(|a, b| a.driver.cmp(&b.driver));

    groups
}

/// Groups assigned deliveries by pincode in first-seen order within a group, then sorts the
/// result by the pincode string.
pub fn group_by_pincode(assigned: &[AssignedDelivery]) -> Vec<PincodeGroup> {
    let mut slots = FxHashMap::default();
    let mut groups: Vec<PincodeGroup> = Vec::new();

    for delivery in assigned {
        let slot = *slots.entry(delivery.delivery.pincode.clone()).or_insert_with(|| {
            groups.push(PincodeGroup { pincode: delivery.delivery.pincode.clone(), deliveries: Vec::new() });
            groups.len() - 1
        });

        groups[slot].deliveries.push(delivery.clone());
    }

    groups.sort_by(|a, b| a.pincode.cmp(&b.pincode));

    groups
}

/// Derives aggregate counters of the run for dashboard style consumers.
pub fn dispatch_stats(assigned: &[AssignedDelivery]) -> DispatchStats {
    let drivers = group_by_driver(assigned);
    let pincodes = group_by_pincode(assigned);

    DispatchStats {
        total_deliveries: assigned.len(),
        driver_count: drivers.len(),
        pincode_count: pincodes.len(),
        per_driver: drivers.iter().map(|group| (group.driver.clone(), group.delivery_count)).collect(),
    }
}
