pub mod time_share;

// Common algorithm traits
use crate::error::FareError;
use crate::models::{Fare, Minutes, Route, Summary, TripSelection};

/// Trait for fare splitting strategies
pub trait FareSplitter {
    /// Compute the distance, time and fare breakdown of a trip.
    ///
    /// Stop indices must be on the route; use `checked_summary` when they
    /// come from an untrusted caller.
    fn compute_summary(&self, route: &Route, selection: &TripSelection) -> Summary;

    /// Split `base_fare` across participants given their travel times.
    /// The first entry is the driver. The result always sums to `base_fare`.
    fn split_fare(&self, times: &[Minutes], base_fare: Fare) -> Vec<Fare>;

    /// Validate the selection against the route, then compute the summary
    fn checked_summary(
        &self,
        route: &Route,
        selection: &TripSelection,
    ) -> Result<Summary, FareError> {
        selection.validate(route)?;
        Ok(self.compute_summary(route, selection))
    }
}
