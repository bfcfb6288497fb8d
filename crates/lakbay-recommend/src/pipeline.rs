//! Filter, rank, and truncate normalized place records.
//!
//! Pure computation over in-memory data: no I/O and no failure modes of
//! its own. NaN ratings or distances and a nonsensical `top_n` are caller
//! preconditions, not handled here.

use serde::Serialize;

use lakbay_core::PlaceRecord;

use crate::fare::transport_estimate;

/// Minimum rating a place must have to be shown. Fixed policy, not
/// user-configurable.
pub const DEFAULT_MIN_RATING: f64 = 4.0;

/// Maximum number of places shown.
pub const DEFAULT_TOP_N: usize = 10;

/// The ranked shortlist handed to the presentation layer, with enough
/// metadata to render the summary line and the transport estimate.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Qualifying records, nearest first, at most `top_n` of them.
    pub records: Vec<PlaceRecord>,
    /// How many raw records came back from the search.
    pub total_count: usize,
    /// How many passed the rating filter (before truncation).
    pub qualifying_count: usize,
    /// Average distance of the shown records; 0 when none are shown.
    pub average_distance_km: f64,
    /// Estimated one-way transport fare in PHP for the average distance.
    pub transport_estimate_php: f64,
}

/// Filters records by `min_rating`, sorts nearest-first (stable, so equal
/// distances keep their input order), and keeps the first `top_n`.
#[must_use]
pub fn recommend(records: Vec<PlaceRecord>, min_rating: f64, top_n: usize) -> Recommendation {
    let total_count = records.len();

    let mut qualifying: Vec<PlaceRecord> = records
        .into_iter()
        .filter(|r| r.rating >= min_rating)
        .collect();
    let qualifying_count = qualifying.len();

    qualifying.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    qualifying.truncate(top_n);

    let average_distance_km = if qualifying.is_empty() {
        0.0
    } else {
        let count = qualifying.len() as f64;
        qualifying.iter().map(|r| r.distance_km).sum::<f64>() / count
    };

    Recommendation {
        transport_estimate_php: transport_estimate(average_distance_km),
        records: qualifying,
        total_count,
        qualifying_count,
        average_distance_km,
    }
}
