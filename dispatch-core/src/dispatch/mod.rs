//! This module contains the assignment engine: a pure, single pass transformation which orders
//! deliveries by priority, partitions them by pincode or proximity, and allocates them to
//! sequentially numbered drivers under a capacity cap.

#[cfg(test)]
#[path = "../../tests/unit/dispatch/dispatch_test.rs"]
mod dispatch_test;

use crate::algorithms::clustering::cluster_by_distance;
use crate::models::{AssignedDelivery, DeliveryRecord};
use crate::utils::Float;
use rustc_hash::FxHashMap;

mod views;
pub use self::views::*;

/// Maximum amount of deliveries a single driver takes before the next driver is opened.
pub const MAX_DELIVERIES_PER_DRIVER: usize = 35;

/// A radius in kilometers within which deliveries are considered close enough to share a cluster.
pub const CLUSTER_RADIUS_KM: Float = 5.;

/// Specifies how a single assignment run partitions and caps deliveries.
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Groups deliveries by geographic proximity instead of pincode. Takes effect only when at
    /// least one delivery carries coordinates.
    pub use_distance_clustering: bool,
    /// An upper bound of deliveries per driver. A group larger than the cap is split across
    /// consecutive drivers.
    pub capacity_per_driver: usize,
    /// A proximity radius used by distance clustering.
    pub cluster_radius_km: Float,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            use_distance_clustering: false,
            capacity_per_driver: MAX_DELIVERIES_PER_DRIVER,
            cluster_radius_km: CLUSTER_RADIUS_KM,
        }
    }
}

/// Sorts deliveries by priority tier keeping the relative order of deliveries with an equal tier.
pub fn sort_by_priority(records: &mut [DeliveryRecord]) {
    records.sort_by_key(|record| record.priority.rank());
}

/// Assigns deliveries to drivers, returning one [`AssignedDelivery`] per input record in group
/// order (pincode groups in first-seen order, or proximity clusters), then in-group order. The
/// result is not re-sorted by driver or id afterwards.
///
/// The run is a total function: the empty input yields the empty output, malformed records are
/// the parser's concern and never reach this point.
pub fn assign_deliveries(records: Vec<DeliveryRecord>, config: &DispatchConfig) -> Vec<AssignedDelivery> {
    let mut records = records;
    sort_by_priority(&mut records);

    let has_coordinates = records.iter().any(|record| record.coordinates().is_some());
    let groups = if config.use_distance_clustering && has_coordinates {
        cluster_by_distance(records, config.cluster_radius_km)
    } else {
        group_by_pincode_order(records)
    };

    let mut assigned = Vec::new();
    let mut driver_index = 1;
    let mut driver_load = 0;

    for group in groups {
        for delivery in group {
            if driver_load >= config.capacity_per_driver {
                driver_index += 1;
                driver_load = 0;
            }

            assigned.push(AssignedDelivery {
                id: format!("DEL-{:04}", assigned.len() + 1),
                driver: driver_label(driver_index),
                vehicle: vehicle_label(driver_index),
                delivery,
            });

            driver_load += 1;
        }
    }

    assigned
}

/// Groups deliveries by exact pincode equality keeping first-seen pincode order.
fn group_by_pincode_order(records: Vec<DeliveryRecord>) -> Vec<Vec<DeliveryRecord>> {
    let mut slots = FxHashMap::default();
    let mut groups: Vec<Vec<DeliveryRecord>> = Vec::new();

    for record in records {
        let slot = *slots.entry(record.pincode.clone()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(record);
    }

    groups
}

fn driver_label(index: usize) -> String {
    format!("Driver {index}")
}

/// Derives a stable letter code from the driver index using bijective base 26:
/// 1 -> A, 26 -> Z, 27 -> AA. Keeps the driver to vehicle pairing 1:1 past the alphabet.
fn vehicle_label(index: usize) -> String {
    let mut index = index;
    let mut letters = Vec::new();

    while index > 0 {
        index -= 1;
        letters.push((b'A' + (index % 26) as u8) as char);
        index /= 26;
    }

    let code = letters.iter().rev().collect::<String>();

    format!("Vehicle {code}")
}
