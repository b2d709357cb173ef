//! Great-circle distance calculation.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/geo_test.rs"]
mod geo_test;

use crate::utils::{Distance, Float};

/// An Earth radius in kilometers used by the haversine formula.
const EARTH_RADIUS_KM: Float = 6371.;

/// Gets distance between two (lat, lng) points in kilometers using the haversine formula.
pub fn haversine_distance(p1: (Float, Float), p2: (Float, Float)) -> Distance {
    let (p1_lat, p1_lng) = p1;
    let (p2_lat, p2_lng) = p2;

    let d_lat = degree_rad(p2_lat - p1_lat);
    let d_lng = degree_rad(p2_lng - p1_lng);

    let lat1 = degree_rad(p1_lat);
    let lat2 = degree_rad(p2_lat);

    let a =
        (d_lat / 2.).sin() * (d_lat / 2.).sin() + (d_lng / 2.).sin() * (d_lng / 2.).sin() * (lat1).cos() * (lat2).cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: Float) -> Float {
    std::f64::consts::PI * degrees / 180.
}
