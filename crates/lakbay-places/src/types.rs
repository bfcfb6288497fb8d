//! Google Places nearby-search response types.
//!
//! Every field on a result item is optional on the wire; defaults are
//! applied during normalization, not here. The top-level envelope carries
//! a `status` string and an optional `error_message`.

use serde::Deserialize;

/// Top-level envelope of a nearby-search response.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceItem>,
}

/// One place as returned by the provider, all fields optional.
#[derive(Debug, Deserialize)]
pub struct PlaceItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Opening-hours fragment; `open_now` may itself be absent even when the
/// object is present.
#[derive(Debug, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
}
