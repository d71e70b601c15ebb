// Models module - exports all model types

mod passenger;
mod route;
mod selection;
mod summary;

// Re-export model types
pub use self::passenger::{NearbyPassenger, Passenger};
pub use self::route::Route;
pub use self::selection::TripSelection;
pub use self::summary::{PassengerDetail, Share, Summary, DRIVER_ID, DRIVER_NAME};

// Common type aliases for improved code readability
pub type StopIndex = usize;
pub type Km = f64;
pub type Minutes = f64;
pub type Fare = u64;
