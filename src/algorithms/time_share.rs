use rayon::prelude::*;

use crate::algorithms::FareSplitter;
use crate::models::{
    Fare, Km, Minutes, PassengerDetail, Route, Share, StopIndex, Summary, TripSelection, DRIVER_ID,
    DRIVER_NAME,
};
use crate::utils::rounding::{km_to_meters, round_half_up, round_km, round_minutes};
use crate::FareConfig;

/// Splits a fare in proportion to each participant's time on the route.
///
/// The driver is charged for the driven segment plus every pickup detour;
/// each passenger for the ride from their pickup to the end stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeShareSplitter {
    /// Travel pace used to turn kilometres into minutes
    pub minutes_per_km: f64,
}

impl Default for TimeShareSplitter {
    fn default() -> Self {
        Self::new(FareConfig::default().minutes_per_km)
    }
}

impl TimeShareSplitter {
    pub fn new(minutes_per_km: f64) -> Self {
        Self { minutes_per_km }
    }

    pub fn from_config(config: &FareConfig) -> Self {
        Self::new(config.minutes_per_km)
    }

    fn minutes_for(&self, km: Km) -> Minutes {
        round_minutes(km * self.minutes_per_km)
    }

    /// Computes one summary per possible end stop, keeping the start,
    /// passengers and fare of `selection`. Results are in stop order.
    pub fn quote_destinations(
        &self,
        route: &Route,
        selection: &TripSelection,
    ) -> Vec<(StopIndex, Summary)> {
        (0..route.len())
            .into_par_iter()
            .map(|end_idx| {
                let candidate = TripSelection {
                    end_idx,
                    ..selection.clone()
                };
                (end_idx, self.compute_summary(route, &candidate))
            })
            .collect()
    }
}

impl FareSplitter for TimeShareSplitter {
    fn compute_summary(&self, route: &Route, selection: &TripSelection) -> Summary {
        let start_km = route.position_km(selection.start_idx);
        let end_km = route.position_km(selection.end_idx);
        let route_km = round_km((end_km - start_km).abs());

        let extra_pickup_km = round_km(
            selection
                .chosen
                .iter()
                .map(|p| p.offset_from(start_km))
                .sum(),
        );
        let driver_km = round_km(route_km + extra_pickup_km);
        let driver_time_min = self.minutes_for(driver_km);

        // pickups outside the driven segment board at the nearest end of it
        let seg_low = start_km.min(end_km);
        let seg_high = start_km.max(end_km);
        let passengers: Vec<PassengerDetail> = selection
            .chosen
            .iter()
            .map(|p| {
                let pickup_abs_km = p.position_km.clamp(seg_low, seg_high);
                let distance_to_end_km = round_km((end_km - pickup_abs_km).abs());
                PassengerDetail {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    position_km: p.position_km,
                    pickup_offset_km: round_km(p.offset_from(start_km)),
                    pickup_abs_km: round_km(pickup_abs_km),
                    distance_to_end_km,
                    time_min: self.minutes_for(distance_to_end_km),
                    meters_from_driver: km_to_meters(p.offset_from(start_km)),
                }
            })
            .collect();

        let times: Vec<Minutes> = std::iter::once(driver_time_min)
            .chain(passengers.iter().map(|p| p.time_min))
            .collect();
        let fares = self.split_fare(&times, selection.base_fare);

        let shares: Vec<Share> = std::iter::once((DRIVER_ID, DRIVER_NAME))
            .chain(passengers.iter().map(|p| (p.id.as_str(), p.name.as_str())))
            .zip(&fares)
            .map(|((id, name), &share)| Share {
                id: id.to_string(),
                name: name.to_string(),
                share,
            })
            .collect();
        let total_cost = shares.iter().map(|s| s.share).sum();

        log::debug!(
            "summary {} -> {}: {} km route, {} km driven, {} passengers, shares {:?}",
            selection.start_idx,
            selection.end_idx,
            route_km,
            driver_km,
            passengers.len(),
            fares
        );

        Summary {
            route_km,
            extra_pickup_km,
            driver_km,
            driver_time_min,
            passengers,
            shares,
            total_cost,
        }
    }

    fn split_fare(&self, times: &[Minutes], base_fare: Fare) -> Vec<Fare> {
        if times.is_empty() {
            return Vec::new();
        }

        let total_time: Minutes = times.iter().sum();
        let total_time = if total_time == 0.0 { 1.0 } else { total_time };
        let fare = base_fare as f64;

        // i128 holds any u64 fare plus the rounding overshoot
        let mut shares: Vec<i128> = times
            .iter()
            .map(|t| round_half_up(t / total_time * fare) as i128)
            .collect();

        // the driver absorbs whatever rounding left over
        let diff = base_fare as i128 - shares.iter().sum::<i128>();
        shares[0] += diff;

        if shares[0] < 0 {
            let mut deficit = -shares[0];
            log::warn!(
                "rounding pushed driver share to {}, taking {} back from passengers",
                shares[0],
                deficit
            );
            shares[0] = 0;
            while deficit > 0 {
                // largest passenger share, earliest on ties
                let Some(idx) = (1..shares.len())
                    .filter(|&i| shares[i] > 0)
                    .max_by(|&a, &b| shares[a].cmp(&shares[b]).then(b.cmp(&a)))
                else {
                    break;
                };
                shares[idx] -= 1;
                deficit -= 1;
            }
        }

        // shares are non-negative and sum to base_fare, so each fits in a Fare
        shares.into_iter().map(|s| s.clamp(0, Fare::MAX as i128) as Fare).collect()
    }
}

/// Computes a trip summary with the given travel pace
pub fn compute_summary(route: &Route, selection: &TripSelection, minutes_per_km: f64) -> Summary {
    TimeShareSplitter::new(minutes_per_km).compute_summary(route, selection)
}
