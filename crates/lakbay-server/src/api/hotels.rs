use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct HotelItem {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

pub(super) async fn list_hotels(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<HotelItem>>> {
    let data = state
        .venues
        .hotels
        .iter()
        .map(|h| HotelItem {
            name: h.name.clone(),
            lat: h.lat,
            lng: h.lng,
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
