//! Transport-cost estimate for reaching the recommended places.
//!
//! A fixed linear tariff modelled on local ride-hailing fares: flagfall
//! plus a per-kilometre rate, floored at a minimum fare. The constants are
//! a policy heuristic reproduced as-is, not sourced from any live API.

use serde::Serialize;

use lakbay_core::currency::to_target_currency;

/// Minimum fare in PHP.
const BASE_FARE_PHP: f64 = 60.0;
/// Flagfall in PHP before the per-km rate applies.
const FLAGFALL_PHP: f64 = 40.0;
/// Per-kilometre rate in PHP.
const PER_KM_PHP: f64 = 15.0;

/// Estimated one-way fare in PHP for an average trip of `avg_distance_km`.
///
/// `max(60, 40 + km * 15)` — the floor also covers the empty-result case
/// where the average distance is zero.
#[must_use]
pub fn transport_estimate(avg_distance_km: f64) -> f64 {
    (FLAGFALL_PHP + avg_distance_km * PER_KM_PHP).max(BASE_FARE_PHP)
}

/// A fare amount in PHP paired with its converted value at a
/// caller-supplied exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransportFare {
    pub php: f64,
    pub converted: f64,
}

impl TransportFare {
    #[must_use]
    pub fn new(php: f64, rate: f64) -> Self {
        Self {
            php,
            converted: to_target_currency(php, rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_floors_at_base_fare() {
        assert!((transport_estimate(0.0) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn short_trip_stays_on_the_floor() {
        // 40 + 1*15 = 55 < 60
        assert!((transport_estimate(1.0) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ten_km_trip_is_190() {
        assert!((transport_estimate(10.0) - 190.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fare_converts_at_given_rate() {
        let fare = TransportFare::new(transport_estimate(10.0), 24.0);
        assert!((fare.php - 190.0).abs() < f64::EPSILON);
        assert!((fare.converted - 4560.0).abs() < f64::EPSILON);
    }
}
