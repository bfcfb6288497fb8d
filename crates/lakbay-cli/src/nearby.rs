//! The `nearby` search command and the venue listing commands.

use anyhow::Context;

use lakbay_core::currency::{to_target_currency, validate_rate};
use lakbay_core::{AppConfig, OpenStatus, PlaceQuery, VenuesFile};
use lakbay_places::{PlacesClient, PlacesConfig, PlacesError};
use lakbay_recommend::{recommend, TransportFare, DEFAULT_MIN_RATING, DEFAULT_TOP_N};

fn load() -> anyhow::Result<(AppConfig, VenuesFile)> {
    let config = lakbay_core::load_app_config()?;
    let venues = lakbay_core::load_venues(&config.venues_path)?;
    Ok((config, venues))
}

pub fn list_hotels() -> anyhow::Result<()> {
    let (_, venues) = load()?;
    for hotel in &venues.hotels {
        println!("{}  ({:.4}, {:.4})", hotel.name, hotel.lat, hotel.lng);
    }
    Ok(())
}

pub fn list_categories() -> anyhow::Result<()> {
    let (_, venues) = load()?;
    for c in &venues.categories {
        println!(
            "{}  [{}]  PHP {}-{}  ({})",
            c.label, c.keyword, c.cost_min, c.cost_max, c.cost_note
        );
    }
    Ok(())
}

pub async fn run(
    hotel_name: &str,
    category_label: &str,
    radius_km: u32,
    rate: Option<f64>,
) -> anyhow::Result<()> {
    let (config, venues) = load()?;

    let hotel = venues
        .hotel(hotel_name)
        .with_context(|| format!("unknown hotel: {hotel_name} (see `lakbay-cli hotels`)"))?;
    let category = venues.category(category_label).with_context(|| {
        format!("unknown category: {category_label} (see `lakbay-cli categories`)")
    })?;
    let rate = validate_rate(rate.unwrap_or(config.default_exchange_rate))?;

    let query = PlaceQuery::new(
        hotel.coordinate(),
        category.keyword.clone(),
        radius_km.saturating_mul(1000),
    )?;

    let places_config = PlacesConfig::from_app_config(&config);
    let client = PlacesClient::new(&config.google_api_key, &places_config)?;

    println!(
        "Searching {} near {} (radius {radius_km}km, rating {DEFAULT_MIN_RATING}+)...",
        category.label, hotel.name
    );

    let records = match client.nearby_search(&query).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "place search failed");
            println!("{}", failure_notice(&e));
            return Ok(());
        }
    };

    let result = recommend(records, DEFAULT_MIN_RATING, DEFAULT_TOP_N);
    if result.records.is_empty() {
        if result.total_count == 0 {
            println!("No places found — try widening the radius or changing category.");
        } else {
            println!(
                "No places rated {DEFAULT_MIN_RATING}+ out of {} found — try widening the radius.",
                result.total_count
            );
        }
        return Ok(());
    }

    println!(
        "{} of {} places qualified:\n",
        result.records.len(),
        result.total_count
    );
    for (i, place) in result.records.iter().enumerate() {
        let status = match place.open_status {
            OpenStatus::Open => "open",
            OpenStatus::Closed => "closed",
            OpenStatus::Unknown => "hours unknown",
        };
        println!(
            "{:>2}. {}  ({:.1} stars, {} reviews, {:.1}km, {})",
            i + 1,
            place.name,
            place.rating,
            place.review_count,
            place.distance_km,
            status
        );
        if !place.address.is_empty() {
            println!("      {}", place.address);
        }
        if let Some(url) = place.maps_url() {
            println!("      {url}");
        }
    }

    let fare = TransportFare::new(result.transport_estimate_php, rate);
    println!(
        "\nTypical cost: PHP {}-{} ({}) — converted {:.0}-{:.0} at rate {rate}",
        category.cost_min,
        category.cost_max,
        category.cost_note,
        to_target_currency(f64::from(category.cost_min), rate),
        to_target_currency(f64::from(category.cost_max), rate),
    );
    println!(
        "Ride estimate for the average {:.1}km trip: PHP {:.0} (~{:.0} converted)",
        result.average_distance_km, fare.php, fare.converted
    );

    Ok(())
}

fn failure_notice(error: &PlacesError) -> &'static str {
    match error {
        PlacesError::Provider { .. } => {
            "The place search service rejected the request — try again later."
        }
        PlacesError::Timeout { .. } => "The place search timed out — try again in a moment.",
        PlacesError::Transport(_) => "Could not reach the place search service.",
    }
}
