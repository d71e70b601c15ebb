// Trip selection: the driver's current choices, owned by the caller

use crate::error::FareError;
use crate::models::{Fare, Passenger, Route, StopIndex};
use serde::{Deserialize, Serialize};

/// Start/end stops, chosen passengers and base fare for one trip.
///
/// The calculator only reads this. Reversed trips (start after end) are legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSelection {
    pub start_idx: StopIndex,
    pub end_idx: StopIndex,

    /// Chosen passengers in selection order
    pub chosen: Vec<Passenger>,

    /// Amount to split, in whole currency units
    pub base_fare: Fare,
}

impl TripSelection {
    pub fn new(start_idx: StopIndex, end_idx: StopIndex, base_fare: Fare) -> Self {
        Self {
            start_idx,
            end_idx,
            chosen: Vec::new(),
            base_fare,
        }
    }

    /// Selection covering the whole route with nobody picked up yet
    pub fn for_route(route: &Route, base_fare: Fare) -> Self {
        Self::new(0, route.len().saturating_sub(1), base_fare)
    }

    pub fn with_passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.chosen = passengers;
        self
    }

    /// Checks both stop indices against the route
    pub fn validate(&self, route: &Route) -> Result<(), FareError> {
        for index in [self.start_idx, self.end_idx] {
            if !route.contains(index) {
                return Err(FareError::StopIndexOutOfBounds {
                    index,
                    len: route.len(),
                });
            }
        }
        Ok(())
    }

    pub fn is_chosen(&self, passenger_id: &str) -> bool {
        self.chosen.iter().any(|p| p.id == passenger_id)
    }

    /// Adds the passenger, or removes them if already chosen.
    ///
    /// Adding is refused once `max_passengers` are chosen. Returns whether the
    /// passenger is chosen after the call.
    pub fn toggle_passenger(&mut self, passenger: &Passenger, max_passengers: usize) -> bool {
        if self.is_chosen(&passenger.id) {
            self.chosen.retain(|p| p.id != passenger.id);
            return false;
        }
        if self.chosen.len() >= max_passengers {
            log::debug!(
                "not adding passenger {}: {} already chosen",
                passenger.id,
                self.chosen.len()
            );
            return false;
        }
        self.chosen.push(passenger.clone());
        true
    }

    /// Toggles the passenger with `passenger_id`, looked up in `candidates`.
    ///
    /// Fails when the id is not among the candidates, e.g. a rider outside the
    /// current nearby search.
    pub fn toggle_by_id(
        &mut self,
        passenger_id: &str,
        candidates: &[Passenger],
        max_passengers: usize,
    ) -> Result<bool, FareError> {
        let passenger = candidates
            .iter()
            .find(|p| p.id == passenger_id)
            .ok_or_else(|| FareError::UnknownPassenger(passenger_id.to_string()))?;
        Ok(self.toggle_passenger(passenger, max_passengers))
    }

    pub fn increase_fare(&mut self, step: Fare) {
        self.base_fare = self.base_fare.saturating_add(step);
    }

    /// Lowers the fare by `step`, stopping at zero
    pub fn decrease_fare(&mut self, step: Fare) {
        self.base_fare = self.base_fare.saturating_sub(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(id: &str) -> Passenger {
        Passenger::new(id, id.to_uppercase(), 0, 0.5)
    }

    #[test]
    fn test_toggle_respects_cap() {
        let mut selection = TripSelection::new(0, 2, 500);
        assert!(selection.toggle_passenger(&passenger("p1"), 2));
        assert!(selection.toggle_passenger(&passenger("p2"), 2));
        assert!(!selection.toggle_passenger(&passenger("p3"), 2));
        assert_eq!(selection.chosen.len(), 2);
        assert!(!selection.is_chosen("p3"));
    }

    #[test]
    fn test_toggle_removes() {
        let mut selection = TripSelection::new(0, 2, 500);
        selection.toggle_passenger(&passenger("p1"), 3);
        selection.toggle_passenger(&passenger("p2"), 3);
        assert!(!selection.toggle_passenger(&passenger("p1"), 3));
        assert_eq!(selection.chosen.len(), 1);
        assert_eq!(selection.chosen[0].id, "p2");
    }

    #[test]
    fn test_toggle_by_id() {
        let candidates = vec![passenger("p1"), passenger("p2")];
        let mut selection = TripSelection::new(0, 2, 500);
        assert!(selection.toggle_by_id("p2", &candidates, 3).unwrap());
        assert!(selection.is_chosen("p2"));
        assert!(!selection.toggle_by_id("p2", &candidates, 3).unwrap());

        let err = selection.toggle_by_id("p9", &candidates, 3).unwrap_err();
        assert!(matches!(err, FareError::UnknownPassenger(id) if id == "p9"));
        assert!(selection.chosen.is_empty());
    }

    #[test]
    fn test_fare_steps() {
        let mut selection = TripSelection::new(0, 1, 500);
        selection.increase_fare(50);
        assert_eq!(selection.base_fare, 550);
        selection.decrease_fare(50);
        selection.decrease_fare(600);
        assert_eq!(selection.base_fare, 0);
    }

    #[test]
    fn test_validate() {
        let route = Route::new(vec!["A", "B", "C"], vec![1.0, 2.0]).unwrap();
        assert!(TripSelection::new(2, 0, 100).validate(&route).is_ok());
        let err = TripSelection::new(0, 3, 100).validate(&route).unwrap_err();
        assert!(matches!(
            err,
            FareError::StopIndexOutOfBounds { index: 3, len: 3 }
        ));
    }

    #[test]
    fn test_for_route() {
        let route = Route::new(vec!["A", "B", "C"], vec![1.0, 2.0]).unwrap();
        let selection = TripSelection::for_route(&route, 500);
        assert_eq!((selection.start_idx, selection.end_idx), (0, 2));
        assert!(selection.chosen.is_empty());
    }
}
