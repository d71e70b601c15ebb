// Route model: the fixed, ordered sequence of carpool stops

use crate::error::FareError;
use crate::models::{Km, StopIndex};
use crate::utils::rounding::round_km;
use serde::{Deserialize, Serialize};

/// Raw stop/distance data as supplied by the stop provider
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RouteData {
    stops: Vec<String>,
    distances: Vec<Km>,
}

/// A fixed carpool route with the cumulative position of every stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteData", into = "RouteData")]
pub struct Route {
    /// Stop names in travel order
    stops: Vec<String>,

    /// distances[i] is the distance from stop i to stop i + 1
    distances: Vec<Km>,

    /// Distance from the first stop to each stop
    cumulative: Vec<Km>,
}

impl Route {
    /// Creates a route after checking that the distances line up with the stops
    pub fn new<S: Into<String>>(stops: Vec<S>, distances: Vec<Km>) -> Result<Self, FareError> {
        if stops.is_empty() {
            return Err(FareError::EmptyRoute);
        }
        if distances.len() + 1 != stops.len() {
            return Err(FareError::StopCountMismatch {
                stops: stops.len(),
                distances: distances.len(),
                expected: stops.len() - 1,
            });
        }
        if let Some((index, &value)) = distances
            .iter()
            .enumerate()
            .find(|(_, d)| !d.is_finite() || **d < 0.0)
        {
            return Err(FareError::InvalidDistance { index, value });
        }

        let cumulative = Self::build_cumulative(&distances);
        log::debug!(
            "built route with {} stops spanning {} km",
            stops.len(),
            cumulative[cumulative.len() - 1]
        );

        Ok(Self {
            stops: stops.into_iter().map(Into::into).collect(),
            distances,
            cumulative,
        })
    }

    /// Creates a route from data already known to be well formed, skipping the
    /// checks in `new`.
    pub(crate) fn from_trusted(stops: &[&str], distances: &[Km]) -> Self {
        Self {
            stops: stops.iter().map(|s| s.to_string()).collect(),
            distances: distances.to_vec(),
            cumulative: Self::build_cumulative(distances),
        }
    }

    /// Builds the cumulative position of each stop from the inter-stop distances.
    ///
    /// The running sum is rounded to 6 decimals at every step, not only at the
    /// end. Input is not validated: a negative distance carries straight through.
    pub fn build_cumulative(distances: &[Km]) -> Vec<Km> {
        let mut cumulative = Vec::with_capacity(distances.len() + 1);
        cumulative.push(0.0);
        for (i, distance) in distances.iter().enumerate() {
            cumulative.push(round_km(cumulative[i] + distance));
        }
        cumulative
    }

    /// Number of stops
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn contains(&self, idx: StopIndex) -> bool {
        idx < self.stops.len()
    }

    /// Name of a stop, if the index is on the route
    pub fn stop_name(&self, idx: StopIndex) -> Option<&str> {
        self.stops.get(idx).map(String::as_str)
    }

    /// Position of a stop in km from the first stop.
    ///
    /// Panics when `idx` is off the route; validate the selection first.
    pub fn position_km(&self, idx: StopIndex) -> Km {
        self.cumulative[idx]
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn distances(&self) -> &[Km] {
        &self.distances
    }

    pub fn cumulative(&self) -> &[Km] {
        &self.cumulative
    }

    /// Length of the whole route in km
    pub fn total_km(&self) -> Km {
        self.cumulative.last().copied().unwrap_or(0.0)
    }
}

impl TryFrom<RouteData> for Route {
    type Error = FareError;

    fn try_from(data: RouteData) -> Result<Self, Self::Error> {
        Route::new(data.stops, data.distances)
    }
}

impl From<Route> for RouteData {
    fn from(route: Route) -> Self {
        RouteData {
            stops: route.stops,
            distances: route.distances,
        }
    }
}
