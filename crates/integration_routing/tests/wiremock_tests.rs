//! Integration tests for the geocoding and routing clients (wiremock-based)

use domain::Coordinate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_routing::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient, OsrmConfig,
    OsrmRoutingClient, RoutingClient, RoutingError,
};

fn nominatim_for_mock(base_url: &str) -> NominatimConfig {
    NominatimConfig {
        base_url: base_url.to_string(),
        ..NominatimConfig::for_testing()
    }
}

fn osrm_for_mock(base_url: &str) -> OsrmConfig {
    OsrmConfig {
        base_url: base_url.to_string(),
        ..OsrmConfig::for_testing()
    }
}

fn san_francisco() -> Coordinate {
    Coordinate::new(37.77, -122.42).unwrap()
}

fn los_angeles() -> Coordinate {
    Coordinate::new(34.05, -118.24).unwrap()
}

const fn sample_route_json() -> &'static str {
    r#"{
        "code": "Ok",
        "routes": [{
            "distance": 615000.0,
            "duration": 21600.0,
            "geometry": {
                "type": "LineString",
                "coordinates": [[-122.42, 37.77], [-120.0, 36.0], [-118.24, 34.05]]
            }
        }],
        "waypoints": []
    }"#
}

// ---- Nominatim ----

#[tokio::test]
async fn test_geocode_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "San Francisco"))
        .and(query_param("format", "jsonv2"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"lat": "37.77", "lon": "-122.42", "display_name": "San Francisco"}]"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&mock_server.uri())).unwrap();
    let coordinate = client.geocode("San Francisco").await.unwrap();

    assert!((coordinate.latitude() - 37.77).abs() < 1e-9);
    assert!((coordinate.longitude() - -122.42).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_numeric_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"lat": 34.05, "lon": -118.24}]"#),
        )
        .mount(&mock_server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&mock_server.uri())).unwrap();
    let coordinate = client.geocode("Los Angeles").await.unwrap();

    assert!((coordinate.latitude() - 34.05).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_no_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&mock_server.uri())).unwrap();
    let err = client.geocode("Nowhereville").await.unwrap_err();

    assert!(matches!(err, GeocodingError::AddressNotFound(ref q) if q == "Nowhereville"));
}

#[tokio::test]
async fn test_geocode_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&mock_server.uri())).unwrap();
    let err = client.geocode("San Francisco").await.unwrap_err();

    assert!(matches!(err, GeocodingError::RequestFailed(_)));
}

#[tokio::test]
async fn test_geocode_country_filter_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("countrycodes", "us"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"lat": "37.77", "lon": "-122.42"}]"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = NominatimConfig {
        country_filter: "us".to_string(),
        ..nominatim_for_mock(&mock_server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();

    assert!(client.geocode("San Francisco").await.is_ok());
}

#[tokio::test]
async fn test_geocode_cache_hit_skips_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"[{"lat": "37.77", "lon": "-122.42"}]"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = NominatimConfig {
        cache_ttl_hours: 1,
        ..nominatim_for_mock(&mock_server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();

    let first = client.geocode("San Francisco").await.unwrap();
    let second = client.geocode("  san francisco ").await.unwrap();

    assert_eq!(first, second);
}

// ---- OSRM ----

#[tokio::test]
async fn test_route_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/driving/-122.42,37.77;-118.24,34.05"))
        .and(query_param("overview", "full"))
        .and(query_param("geometries", "geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OsrmRoutingClient::new(&osrm_for_mock(&mock_server.uri())).unwrap();
    let route = client.route(san_francisco(), los_angeles()).await.unwrap();

    assert!((route.distance_meters - 615_000.0).abs() < f64::EPSILON);
    assert!((route.duration_seconds - 21_600.0).abs() < f64::EPSILON);
    assert_eq!(route.geometry.len(), 3);
    assert!((route.geometry[0].latitude() - 37.77).abs() < 1e-9);
    assert!((route.geometry[0].longitude() - -122.42).abs() < 1e-9);
    assert!((route.geometry[2].latitude() - 34.05).abs() < 1e-9);
}

#[tokio::test]
async fn test_route_no_route_body_on_400() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/driving/-122.42,37.77;-118.24,34.05"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = OsrmRoutingClient::new(&osrm_for_mock(&mock_server.uri())).unwrap();
    let err = client
        .route(san_francisco(), los_angeles())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::NoRoute { ref code, .. } if code == "NoRoute"));
}

#[tokio::test]
async fn test_route_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let client = OsrmRoutingClient::new(&osrm_for_mock(&mock_server.uri())).unwrap();
    let err = client
        .route(san_francisco(), los_angeles())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::RequestFailed(_)));
}

#[tokio::test]
async fn test_route_empty_routes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"code": "Ok", "routes": []}"#),
        )
        .mount(&mock_server)
        .await;

    let client = OsrmRoutingClient::new(&osrm_for_mock(&mock_server.uri())).unwrap();
    let err = client
        .route(san_francisco(), los_angeles())
        .await
        .unwrap_err();

    assert!(matches!(err, RoutingError::NoRoute { .. }));
}

#[tokio::test]
async fn test_route_connection_refused() {
    let config = osrm_for_mock("http://127.0.0.1:1");
    let client = OsrmRoutingClient::new(&config).unwrap();

    let err = client
        .route(san_francisco(), los_angeles())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RoutingError::ConnectionFailed(_) | RoutingError::Timeout { .. }
    ));
}
