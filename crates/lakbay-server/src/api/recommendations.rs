use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use lakbay_core::currency::{to_target_currency, validate_rate};
use lakbay_core::{OpenStatus, PlaceQuery};
use lakbay_places::PlacesError;
use lakbay_recommend::{recommend, Recommendation, TransportFare, DEFAULT_MIN_RATING, DEFAULT_TOP_N};

const DEFAULT_RADIUS_M: u32 = 3000;

#[derive(Debug, Deserialize)]
pub(super) struct RecommendationsQuery {
    pub hotel: String,
    pub category: String,
    pub radius_m: Option<u32>,
    pub rate: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct RecommendedPlace {
    pub rank: usize,
    pub name: String,
    pub rating: f64,
    pub review_count: u32,
    pub address: String,
    pub open_status: OpenStatus,
    pub distance_km: f64,
    pub maps_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct CostEstimateData {
    pub min_php: u32,
    pub max_php: u32,
    pub min_converted: f64,
    pub max_converted: f64,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub(super) struct RecommendationsData {
    pub hotel: String,
    pub category: String,
    pub radius_m: u32,
    pub min_rating: f64,
    pub exchange_rate: f64,
    pub places: Vec<RecommendedPlace>,
    pub total_count: usize,
    pub qualifying_count: usize,
    pub average_distance_km: f64,
    pub transport_fare: TransportFare,
    pub cost_estimate: CostEstimateData,
    /// User-facing note when the shortlist is empty (search failure or no
    /// qualifying places); `None` when there are results to show.
    pub notice: Option<String>,
}

pub(super) async fn get_recommendations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<RecommendationsQuery>,
) -> Result<Json<ApiResponse<RecommendationsData>>, ApiError> {
    let hotel = state.venues.hotel(&params.hotel).ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("unknown hotel: {}", params.hotel),
        )
    })?;
    let category = state.venues.category(&params.category).ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("unknown category: {}", params.category),
        )
    })?;

    let rate = params.rate.unwrap_or(state.config.default_exchange_rate);
    let rate = validate_rate(rate)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    let radius_m = params.radius_m.unwrap_or(DEFAULT_RADIUS_M);
    let query = PlaceQuery::new(hotel.coordinate(), category.keyword.clone(), radius_m)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    // A failed search degrades to an empty shortlist with a notice; the
    // raw error stays in the logs.
    let (recommendation, notice) = match state.places.nearby_search(&query).await {
        Ok(records) => {
            let recommendation = recommend(records, DEFAULT_MIN_RATING, DEFAULT_TOP_N);
            let notice = empty_shortlist_notice(&recommendation);
            (recommendation, notice)
        }
        Err(e) => {
            tracing::warn!(error = %e, hotel = %hotel.name, category = %category.label, "place search failed");
            (
                recommend(vec![], DEFAULT_MIN_RATING, DEFAULT_TOP_N),
                Some(search_failure_notice(&e)),
            )
        }
    };

    let places = recommendation
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| RecommendedPlace {
            rank: i + 1,
            name: r.name.clone(),
            rating: r.rating,
            review_count: r.review_count,
            address: r.address.clone(),
            open_status: r.open_status,
            distance_km: r.distance_km,
            maps_url: r.maps_url(),
        })
        .collect();

    let data = RecommendationsData {
        hotel: hotel.name.clone(),
        category: category.label.clone(),
        radius_m,
        min_rating: DEFAULT_MIN_RATING,
        exchange_rate: rate,
        places,
        total_count: recommendation.total_count,
        qualifying_count: recommendation.qualifying_count,
        average_distance_km: recommendation.average_distance_km,
        transport_fare: TransportFare::new(recommendation.transport_estimate_php, rate),
        cost_estimate: CostEstimateData {
            min_php: category.cost_min,
            max_php: category.cost_max,
            min_converted: to_target_currency(f64::from(category.cost_min), rate),
            max_converted: to_target_currency(f64::from(category.cost_max), rate),
            note: category.cost_note.clone(),
        },
        notice,
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn empty_shortlist_notice(recommendation: &Recommendation) -> Option<String> {
    if !recommendation.records.is_empty() {
        return None;
    }
    if recommendation.total_count == 0 {
        Some("No places found — try widening the radius or changing category.".to_string())
    } else {
        Some(format!(
            "No places rated {DEFAULT_MIN_RATING}+ nearby — try widening the radius."
        ))
    }
}

fn search_failure_notice(error: &PlacesError) -> String {
    match error {
        PlacesError::Provider { .. } => {
            "The place search service rejected the request — no results to show. \
             Try again later or widen the radius."
                .to_string()
        }
        PlacesError::Timeout { .. } => {
            "The place search timed out — no results to show. Try again in a moment.".to_string()
        }
        PlacesError::Transport(_) => {
            "Could not reach the place search service — no results to show.".to_string()
        }
    }
}
