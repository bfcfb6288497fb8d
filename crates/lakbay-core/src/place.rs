//! Core value objects for place search and recommendation.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A latitude/longitude pair in degrees. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Whether a place reported itself open at query time.
///
/// `Unknown` is a legitimate state of its own: the provider omits
/// `opening_hours` entirely for places with no registered schedule, which
/// is not the same as "closed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenStatus {
    Open,
    Closed,
    Unknown,
}

/// Input to one nearby search: origin, provider keyword, radius in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    pub origin: Coordinate,
    pub keyword: String,
    pub radius_m: u32,
}

impl PlaceQuery {
    /// Builds a query, rejecting a zero radius.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRadius`] when `radius_m` is zero.
    pub fn new(
        origin: Coordinate,
        keyword: impl Into<String>,
        radius_m: u32,
    ) -> Result<Self, CoreError> {
        if radius_m == 0 {
            return Err(CoreError::InvalidRadius(radius_m));
        }
        Ok(Self {
            origin,
            keyword: keyword.into(),
            radius_m,
        })
    }
}

/// One normalized place returned by the search adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    pub name: String,
    /// Provider star rating. Defaults to 0.0 when the provider omits the
    /// field — indistinguishable from a genuine zero rating; kept that way
    /// deliberately rather than resolved one way or the other.
    pub rating: f64,
    pub review_count: u32,
    pub location: Coordinate,
    pub address: String,
    pub open_status: OpenStatus,
    /// Provider place ID; empty when omitted.
    pub external_id: String,
    /// Distance from the query origin in kilometres. Always recomputed on
    /// our side, never taken from the provider.
    pub distance_km: f64,
}

impl PlaceRecord {
    /// Google Maps deeplink for this place, or `None` when the provider
    /// returned no place ID.
    #[must_use]
    pub fn maps_url(&self) -> Option<String> {
        if self.external_id.is_empty() {
            None
        } else {
            Some(format!(
                "https://www.google.com/maps/place/?q=place_id:{}",
                self.external_id
            ))
        }
    }
}
