//! Domain types and shared configuration for the lakbay workspace.

pub mod app_config;
pub mod config;
pub mod currency;
pub mod geo;
pub mod place;
pub mod venues;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use place::{Coordinate, OpenStatus, PlaceQuery, PlaceRecord};
pub use venues::{load_venues, CategoryConfig, Hotel, VenuesFile};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("search radius must be positive, got {0}m")]
    InvalidRadius(u32),

    #[error("exchange rate must be a positive finite number, got {0}")]
    InvalidExchangeRate(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read venues file {path}: {source}")]
    VenuesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse venues file: {0}")]
    VenuesFileParse(#[from] serde_yaml::Error),

    #[error("invalid venues configuration: {0}")]
    Validation(String),
}
