//! This module contains a greedy proximity clustering of deliveries.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/clustering_test.rs"]
mod clustering_test;

use crate::algorithms::geo::haversine_distance;
use crate::models::DeliveryRecord;
use crate::utils::Float;

/// Partitions deliveries into proximity clusters using a greedy seed-and-absorb scan:
/// the first unclustered delivery seeds a new cluster and, when it has coordinates, absorbs all
/// remaining deliveries with coordinates within `radius_km` of the seed, keeping their order.
/// Deliveries without coordinates are never absorbed and form singleton clusters as seeds.
///
/// Distance is measured to the seed only, not to a cluster centroid, so a cluster can locally
/// exceed the radius for transitively chained points. This is a documented approximation of
/// nearest neighbor clustering, not a correctness bug.
pub fn cluster_by_distance(records: Vec<DeliveryRecord>, radius_km: Float) -> Vec<Vec<DeliveryRecord>> {
    let mut pool = records;
    let mut clusters = Vec::new();

    while !pool.is_empty() {
        let seed = pool.remove(0);
        let mut cluster = vec![seed];

        if let Some(origin) = cluster[0].coordinates() {
            let (absorbed, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut pool).into_iter().partition(|record| {
                record.coordinates().is_some_and(|point| haversine_distance(origin, point) <= radius_km)
            });

            cluster.extend(absorbed);
            pool = rest;
        }

        clusters.push(cluster);
    }

    clusters
}
