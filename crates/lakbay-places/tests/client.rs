//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use lakbay_core::{Coordinate, OpenStatus, PlaceQuery};
use lakbay_places::{PlacesClient, PlacesConfig, PlacesError, TransportError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    let config = PlacesConfig {
        timeout_secs: 10,
        cache_ttl_secs: 3600,
        language: "ko".to_string(),
    };
    PlacesClient::with_base_url("test-key", &config, base_url)
        .expect("client construction should not fail")
}

fn waterfront_query(keyword: &str) -> PlaceQuery {
    PlaceQuery::new(
        Coordinate {
            lat: 10.3119,
            lng: 123.8916,
        },
        keyword,
        3000,
    )
    .unwrap()
}

#[tokio::test]
async fn nearby_search_parses_and_normalizes_results() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "name": "Tree Shade Spa",
                "rating": 4.5,
                "user_ratings_total": 870,
                "geometry": { "location": { "lat": 10.3170, "lng": 123.9056 } },
                "opening_hours": { "open_now": true },
                "vicinity": "Salinas Drive, Cebu City",
                "place_id": "ChIJtree"
            },
            {
                "name": "Nameless Corner"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .and(query_param("keyword", "spa|massage"))
        .and(query_param("radius", "3000"))
        .and(query_param("language", "ko"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .nearby_search(&waterfront_query("spa|massage"))
        .await
        .expect("should parse results");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Tree Shade Spa");
    assert_eq!(records[0].open_status, OpenStatus::Open);
    assert_eq!(records[0].external_id, "ChIJtree");
    assert!(records[0].distance_km > 0.0 && records[0].distance_km < 5.0);

    // Missing optional fields resolve to defaults, never errors.
    assert_eq!(records[1].rating, 0.0);
    assert_eq!(records[1].review_count, 0);
    assert_eq!(records[1].open_status, OpenStatus::Unknown);
    assert_eq!(records[1].external_id, "");
}

#[tokio::test]
async fn zero_results_is_an_empty_success() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .nearby_search(&waterfront_query("karaoke"))
        .await
        .expect("ZERO_RESULTS should not be an error");

    assert!(records.is_empty());
}

#[tokio::test]
async fn over_query_limit_is_a_provider_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OVER_QUERY_LIMIT",
        "error_message": "You have exceeded your daily request quota for this API."
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.nearby_search(&waterfront_query("bar")).await;

    match result {
        Err(PlacesError::Provider { status, message }) => {
            assert_eq!(status, "OVER_QUERY_LIMIT");
            assert!(message.contains("daily request quota"));
        }
        other => panic!("expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn provider_error_without_message_falls_back_to_status() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "REQUEST_DENIED" });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.nearby_search(&waterfront_query("cafe")).await;

    match result {
        Err(PlacesError::Provider { status, message }) => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "REQUEST_DENIED");
        }
        other => panic!("expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn identical_queries_hit_the_provider_once() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "name": "Handuraw Pizza",
                "rating": 4.3,
                "user_ratings_total": 512,
                "geometry": { "location": { "lat": 10.3321, "lng": 123.9054 } },
                "vicinity": "Gorordo Ave, Cebu City",
                "place_id": "ChIJhanduraw"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = waterfront_query("restaurant");

    let first = client.nearby_search(&query).await.expect("first call");
    let second = client.nearby_search(&query).await.expect("cached call");

    assert_eq!(first, second);
    // Mock expectation (exactly one provider call) is verified on drop.
}

#[tokio::test]
async fn different_radius_bypasses_the_cache() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let origin = Coordinate {
        lat: 10.3119,
        lng: 123.8916,
    };
    let near = PlaceQuery::new(origin, "spa", 1000).unwrap();
    let far = PlaceQuery::new(origin, "spa", 5000).unwrap();

    client.nearby_search(&near).await.expect("near call");
    client.nearby_search(&far).await.expect("far call");
}

#[tokio::test]
async fn failures_are_not_cached() {
    let server = MockServer::start().await;

    let denied = serde_json::json!({ "status": "REQUEST_DENIED" });

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&denied))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = waterfront_query("club");

    assert!(client.nearby_search(&query).await.is_err());
    // The second attempt must reach the provider again.
    assert!(client.nearby_search(&query).await.is_err());
}

#[tokio::test]
async fn malformed_body_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.nearby_search(&waterfront_query("spa")).await;

    assert!(matches!(
        result,
        Err(PlacesError::Transport(TransportError::Decode { .. }))
    ));
}

#[tokio::test]
async fn http_500_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.nearby_search(&waterfront_query("spa")).await;

    assert!(matches!(
        result,
        Err(PlacesError::Transport(TransportError::Http(_)))
    ));
}
