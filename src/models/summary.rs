// Summary models: the fare and distance breakdown handed to the presentation layer

use crate::error::FareError;
use crate::models::{Fare, Km, Minutes};
use serde::{Deserialize, Serialize};

/// Participant id used for the driver's share
pub const DRIVER_ID: &str = "driver";
pub const DRIVER_NAME: &str = "Driver";

/// Per-passenger distance and time breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerDetail {
    pub id: String,
    pub name: String,
    pub position_km: Km,

    /// Distance between the passenger and the driver's start
    pub pickup_offset_km: Km,

    /// Pickup point clamped into the driven segment
    pub pickup_abs_km: Km,

    /// Distance from the clamped pickup to the end stop
    pub distance_to_end_km: Km,

    /// Travel time for `distance_to_end_km`
    pub time_min: Minutes,

    /// Unclamped metres from the driver's start, for display
    pub meters_from_driver: u64,
}

/// Fare allocated to one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub id: String,
    pub name: String,
    pub share: Fare,
}

/// Complete breakdown of a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub route_km: Km,
    pub extra_pickup_km: Km,
    pub driver_km: Km,
    pub driver_time_min: Minutes,
    pub passengers: Vec<PassengerDetail>,

    /// Driver first, then passengers in selection order
    pub shares: Vec<Share>,

    /// Sum of all shares
    pub total_cost: Fare,
}

impl Summary {
    pub fn driver_share(&self) -> Fare {
        self.share_for(DRIVER_ID).unwrap_or(0)
    }

    pub fn share_for(&self, id: &str) -> Option<Fare> {
        self.shares.iter().find(|s| s.id == id).map(|s| s.share)
    }

    /// Pretty-printed JSON for the presentation layer
    pub fn to_json_pretty(&self) -> Result<String, FareError> {
        serde_json::to_string_pretty(self).map_err(|e| FareError::SerializeError {
            what: String::from("summary"),
            error: e.to_string(),
        })
    }

    /// True when the shares add up to exactly `base_fare`
    pub fn is_balanced(&self, base_fare: Fare) -> bool {
        self.shares.iter().map(|s| s.share).sum::<Fare>() == base_fare
            && self.total_cost == base_fare
    }
}
