// Proximity search for riders along the route

use crate::models::{Km, NearbyPassenger, Passenger, Route, TripSelection};
use crate::utils::rounding::km_to_meters;

/// Finds all passengers within `radius_km` of `point_km`, nearest first.
///
/// Bounds are inclusive. Passengers at the same distance keep their input order.
pub fn find_nearby(point_km: Km, radius_km: Km, passengers: &[Passenger]) -> Vec<NearbyPassenger> {
    let low = point_km - radius_km;
    let high = point_km + radius_km;

    let mut found: Vec<NearbyPassenger> = passengers
        .iter()
        .filter(|p| p.position_km >= low && p.position_km <= high)
        .map(|p| NearbyPassenger {
            passenger: p.clone(),
            meters_from_point: km_to_meters(p.position_km - point_km),
        })
        .collect();

    // sort_by_key is stable
    found.sort_by_key(|n| n.meters_from_point);
    found
}

/// Finds passengers near the driver's start stop
pub fn find_nearby_start(
    route: &Route,
    selection: &TripSelection,
    radius_km: Km,
    passengers: &[Passenger],
) -> Vec<NearbyPassenger> {
    let start_km = route.position_km(selection.start_idx);
    let found = find_nearby(start_km, radius_km, passengers);
    log::debug!(
        "{} passengers within {} km of {}",
        found.len(),
        radius_km,
        route.stop_name(selection.start_idx).unwrap_or("?")
    );
    found
}
