// Public modules
pub mod algorithms;
pub mod error;
pub mod fare_config;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::time_share::{compute_summary, TimeShareSplitter};
pub use algorithms::FareSplitter;
pub use error::FareError;
pub use fare_config::FareConfig;
pub use models::{Passenger, Route, Share, Summary, TripSelection};
