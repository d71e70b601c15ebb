// Passenger model for riders waiting along the route

use crate::models::{Km, StopIndex};
use serde::{Deserialize, Serialize};

/// A rider with a fixed position along the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Stop the passenger is closest to
    pub stop_index: StopIndex,

    /// Position in km from the first stop, may lie between stops
    pub position_km: Km,
}

impl Passenger {
    pub fn new<I: Into<String>, N: Into<String>>(
        id: I,
        name: N,
        stop_index: StopIndex,
        position_km: Km,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stop_index,
            position_km,
        }
    }

    /// Absolute distance in km between this passenger and a point on the route
    pub fn offset_from(&self, point_km: Km) -> Km {
        (self.position_km - point_km).abs()
    }
}

/// Result of a proximity query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyPassenger {
    #[serde(flatten)]
    pub passenger: Passenger,

    /// Whole metres between the passenger and the queried point
    pub meters_from_point: u64,
}
