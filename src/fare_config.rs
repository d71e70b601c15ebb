// Tunable constants for fare splitting and the rider search

use crate::error::FareError;
use crate::models::{Fare, Km};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Environment variables with this prefix override file values,
/// e.g. `CARPOOL_MINUTES_PER_KM=2.5`.
pub const ENV_PREFIX: &str = "CARPOOL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareConfig {
    /// Assumed travel pace; 2 min/km is an average of 30 km/h
    pub minutes_per_km: f64,

    /// Search radius around the driver's start for nearby riders
    pub nearby_radius_km: Km,

    /// Selection cap applied when toggling passengers
    pub max_passengers: usize,

    /// Amount added or removed by one fare step
    pub fare_step: Fare,

    pub default_base_fare: Fare,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            minutes_per_km: 2.0,
            nearby_radius_km: 1.0,
            max_passengers: 3,
            fare_step: 50,
            default_base_fare: 500,
        }
    }
}

impl FareConfig {
    /// Loads the config from an optional TOML file, then applies environment overrides
    pub fn load(filepath: Option<&str>) -> Result<Self, FareError> {
        let mut builder = Config::builder();
        if let Some(filepath) = filepath {
            builder = builder.add_source(File::new(filepath, FileFormat::Toml));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| FareError::ConfigReadError {
                msg: format!("failed reading config '{}'", filepath.unwrap_or("<env>")),
                source: e,
            })?;
        let fare_config = config
            .try_deserialize::<FareConfig>()
            .map_err(|e| FareError::ConfigReadError {
                msg: String::from("failed deserializing fare config"),
                source: e,
            })?;
        log::debug!("loaded fare config: {fare_config:?}");
        Ok(fare_config)
    }

    /// Loads a config from TOML text
    pub fn from_toml_str(toml: &str) -> Result<Self, FareError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize::<FareConfig>())
            .map_err(|e| FareError::ConfigReadError {
                msg: String::from("failed reading inline fare config"),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FareConfig::default();
        assert_eq!(config.minutes_per_km, 2.0);
        assert_eq!(config.max_passengers, 3);
        assert_eq!(config.fare_step, 50);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FareConfig::from_toml_str("minutes_per_km = 3.0\nmax_passengers = 4\n").unwrap();
        assert_eq!(config.minutes_per_km, 3.0);
        assert_eq!(config.max_passengers, 4);
        assert_eq!(config.nearby_radius_km, 1.0);
        assert_eq!(config.default_base_fare, 500);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = FareConfig::load(Some("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, FareError::ConfigReadError { .. }));
    }
}
