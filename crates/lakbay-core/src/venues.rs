//! Static venue configuration: hotel origins, search categories, and the
//! per-category cost table.
//!
//! These were once ambient lookup tables; here they are immutable data
//! loaded from YAML at startup and injected into whatever needs them.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::place::Coordinate;
use crate::ConfigError;

/// A named search origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Hotel {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A search category: display label, provider keyword, and the expected
/// per-person cost range in PHP with a human-readable basis note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub label: String,
    pub keyword: String,
    pub cost_min: u32,
    pub cost_max: u32,
    pub cost_note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenuesFile {
    pub hotels: Vec<Hotel>,
    pub categories: Vec<CategoryConfig>,
}

impl VenuesFile {
    /// Finds a hotel by name, case-insensitively.
    #[must_use]
    pub fn hotel(&self, name: &str) -> Option<&Hotel> {
        let wanted = name.to_lowercase();
        self.hotels.iter().find(|h| h.name.to_lowercase() == wanted)
    }

    /// Finds a category by label, case-insensitively.
    #[must_use]
    pub fn category(&self, label: &str) -> Option<&CategoryConfig> {
        let wanted = label.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.label.to_lowercase() == wanted)
    }
}

/// Load and validate the venues configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_venues(path: &Path) -> Result<VenuesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VenuesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let venues: VenuesFile = serde_yaml::from_str(&content).map_err(ConfigError::VenuesFileParse)?;

    validate_venues(&venues)?;

    Ok(venues)
}

fn validate_venues(venues: &VenuesFile) -> Result<(), ConfigError> {
    if venues.hotels.is_empty() {
        return Err(ConfigError::Validation(
            "at least one hotel is required".to_string(),
        ));
    }
    if venues.categories.is_empty() {
        return Err(ConfigError::Validation(
            "at least one category is required".to_string(),
        ));
    }

    let mut seen_hotels = HashSet::new();
    for hotel in &venues.hotels {
        if hotel.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "hotel name must be non-empty".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&hotel.lat) || !(-180.0..=180.0).contains(&hotel.lng) {
            return Err(ConfigError::Validation(format!(
                "hotel '{}' has out-of-range coordinates ({}, {})",
                hotel.name, hotel.lat, hotel.lng
            )));
        }
        if !seen_hotels.insert(hotel.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate hotel name: '{}'",
                hotel.name
            )));
        }
    }

    let mut seen_labels = HashSet::new();
    for category in &venues.categories {
        if category.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category label must be non-empty".to_string(),
            ));
        }
        if category.keyword.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' has an empty keyword",
                category.label
            )));
        }
        if category.cost_min > category.cost_max {
            return Err(ConfigError::Validation(format!(
                "category '{}' has cost_min {} greater than cost_max {}",
                category.label, category.cost_min, category.cost_max
            )));
        }
        if !seen_labels.insert(category.label.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category label: '{}'",
                category.label
            )));
        }
    }

    Ok(())
}
