use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::FareError;
use crate::models::{Passenger, Route};
use crate::utils::rounding::round_to;

/// Stops of the Peshawar BRT corridor, in travel order
pub const DEFAULT_STOPS: [&str; 31] = [
    "Chamkani Chowk",
    "Chughal Pura",
    "Dr Zareef Memorial School",
    "Sethi Town",
    "Sikandar Town",
    "Gulbahar Square",
    "Hashtnagri (Qila Bala Hisar)",
    "Qila Balahisar",
    "Hospital Road",
    "Khyber Bazaar",
    "Soekarno Square / Secretariat",
    "Dabgari Gardens",
    "Railway Station",
    "State Bank of Pakistan",
    "Saddar Bazar",
    "Mall Road",
    "Khyber Road / Airport area",
    "Gora Qabristan",
    "Tehkal",
    "Tambuwaan",
    "Abdara Road",
    "University Town",
    "KTH (University of Peshawar)",
    "Islamia College",
    "Board Bazar Regi",
    "Taj Abad",
    "Hayatabad Model School",
    "Hayatabad Phase 3",
    "Tatara Park",
    "PDA Hayatabad",
    "Cancer Hospital",
];

/// Distances in km between consecutive stops
pub const DEFAULT_DISTANCES: [f64; 30] = [
    1.62, 1.4, 0.655, 0.66, 0.915, 0.79, 0.53, 0.7, 0.59, 0.55, 0.64, 0.55, 1.05, 0.62, 0.84,
    0.69, 1.27, 0.78, 0.78, 0.8, 0.79, 0.76, 0.85, 0.73, 1.25, 0.92, 0.67, 1.45, 0.63, 0.68,
];

/// Names used for the sample riders
pub const MOCK_NAMES: [&str; 30] = [
    "Aisha", "Bilal", "Faisal", "Hina", "Kamal", "Laila", "Naveed", "Salma", "Usman", "Zara",
    "Mubashir", "Sara", "Omer", "Rabia", "Tariq", "Imran", "Sana", "Yasir", "Amna", "Farhan",
    "Rida", "Adnan", "Areeba", "Zubair", "Daniyal", "Huma", "Feroze", "Nida", "Hamza", "Mona",
];

/// The built-in route
pub fn default_route() -> Route {
    // one more stop than distances, all distances non-negative
    Route::from_trusted(&DEFAULT_STOPS, &DEFAULT_DISTANCES)
}

/// Sample riders spread along `route`, each a small offset away from a stop.
///
/// Rider `i` sits near stop `i % len` and its position is rounded to metres.
pub fn mock_passengers(route: &Route) -> Vec<Passenger> {
    if route.is_empty() {
        return Vec::new();
    }
    MOCK_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let stop_index = i % route.len();
            let offset = ((i * 53) % 91) as f64 / 200.0 - 0.225;
            let position_km = round_to((route.position_km(stop_index) + offset).max(0.0), 3);
            Passenger::new(format!("p{}", i + 1), *name, stop_index, position_km)
        })
        .collect()
}

/// Loads a route from a JSON file of the form `{"stops": [...], "distances": [...]}`
pub fn load_route_json<P: AsRef<Path>>(path: P) -> Result<Route, FareError> {
    let route: Route = read_json(path.as_ref())?;
    log::info!(
        "Loaded route with {} stops from {}",
        route.len(),
        path.as_ref().display()
    );
    Ok(route)
}

/// Loads passengers from a JSON array of passenger records
pub fn load_passengers_json<P: AsRef<Path>>(path: P) -> Result<Vec<Passenger>, FareError> {
    let passengers: Vec<Passenger> = read_json(path.as_ref())?;
    log::info!(
        "Loaded {} passengers from {}",
        passengers.len(),
        path.as_ref().display()
    );
    Ok(passengers)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FareError> {
    let filepath = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| FareError::ReadError {
        filepath: filepath.clone(),
        error: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| FareError::ParseError {
        filepath,
        error: e.to_string(),
    })
}
