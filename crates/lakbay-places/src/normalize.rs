//! Normalization of provider place items into domain [`PlaceRecord`]s.

use lakbay_core::{geo, Coordinate, OpenStatus, PlaceRecord};

use crate::types::PlaceItem;

/// Placeholder for places the provider returns without a name.
const UNNAMED: &str = "(unnamed)";

/// Maps provider items into [`PlaceRecord`]s, filling in the documented
/// defaults for absent fields and computing each record's distance from
/// `origin`. Provider ordering is passed through untouched; ranking is the
/// pipeline's job.
#[must_use]
pub fn normalize_results(origin: Coordinate, items: Vec<PlaceItem>) -> Vec<PlaceRecord> {
    items.into_iter().map(|item| normalize_item(origin, item)).collect()
}

fn normalize_item(origin: Coordinate, item: PlaceItem) -> PlaceRecord {
    let location = item
        .geometry
        .map_or(Coordinate { lat: 0.0, lng: 0.0 }, |g| Coordinate {
            lat: g.location.lat,
            lng: g.location.lng,
        });

    // Tri-state: the whole opening_hours object absent means "hours
    // unknown", distinct from an explicit open_now=false.
    let open_status = match item.opening_hours.and_then(|o| o.open_now) {
        Some(true) => OpenStatus::Open,
        Some(false) => OpenStatus::Closed,
        None => OpenStatus::Unknown,
    };

    PlaceRecord {
        name: item.name.unwrap_or_else(|| UNNAMED.to_string()),
        rating: item.rating.unwrap_or(0.0),
        review_count: item.user_ratings_total.unwrap_or(0),
        location,
        address: item.vicinity.unwrap_or_default(),
        open_status,
        external_id: item.place_id.unwrap_or_default(),
        distance_km: geo::distance_km(origin, location),
    }
}
