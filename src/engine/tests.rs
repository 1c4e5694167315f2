use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use geo_types::LineString;
use tokio_test::{assert_err, assert_ok};

use super::Engine;
use crate::{
    api::{LocationAPI, MapAPI, PickupAPI, RouteAPI, SessionAPI},
    config::Config,
    entities::{
        Coordinate, LocationSource, PickupInput, PositionError, PositionErrorCode,
        PositionResult, RoutePath, RouteRequest, FACILITY_LOCATION,
    },
    error::{
        invalid_input_error, location_required_error, no_route_error, not_found_error,
        pickup_details_required_error, Error,
    },
    external::RoutingService,
    receipt::{DocumentRenderer, ReceiptLayout},
};

#[derive(Clone, Default)]
struct FakeRouter {
    requests: Arc<Mutex<Vec<RouteRequest>>>,
    unreachable: Arc<Mutex<Option<Coordinate>>>,
}

#[async_trait]
impl RoutingService for FakeRouter {
    async fn find_route(&self, request: &RouteRequest) -> Result<RoutePath, Error> {
        self.requests.lock().unwrap().push(request.clone());

        if request.destination() == self.unreachable.lock().unwrap().as_ref() {
            return Err(no_route_error());
        }

        let geometry: LineString<f64> = request
            .waypoints
            .iter()
            .map(|c| (c.longitude(), c.latitude()))
            .collect::<Vec<_>>()
            .into();

        Ok(RoutePath {
            geometry,
            distance: 1000.0,
            duration: 120.0,
        })
    }
}

#[derive(Clone, Default)]
struct RecordingRenderer {
    layouts: Arc<Mutex<Vec<ReceiptLayout>>>,
}

impl DocumentRenderer for RecordingRenderer {
    fn render(&self, layout: &ReceiptLayout) -> Result<Vec<u8>, Error> {
        self.layouts.lock().unwrap().push(layout.clone());
        Ok(b"%PDF-fake".to_vec())
    }
}

struct Harness {
    engine: Engine,
    router: FakeRouter,
    renderer: RecordingRenderer,
}

fn harness() -> Harness {
    let router = FakeRouter::default();
    let renderer = RecordingRenderer::default();
    let engine = Engine::new(Config::default(), router.clone(), renderer.clone());

    Harness {
        engine,
        router,
        renderer,
    }
}

fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).unwrap()
}

fn manual(latitude: &str, longitude: &str) -> LocationSource {
    LocationSource::Manual {
        latitude: Some(latitude.into()),
        longitude: Some(longitude.into()),
    }
}

#[tokio::test]
async fn manual_entry_places_user_marker() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);

    for (lat, lng) in [("12.9716", "77.5946"), ("-33.8688", "151.2093"), ("0", "0")] {
        let map = assert_ok!(h.engine.locate_user(session.id, manual(lat, lng)).await).unwrap();
        let expected = coordinate(lat.parse().unwrap(), lng.parse().unwrap());

        assert_eq!(map.user_marker().unwrap().position, expected);
        assert_eq!(map.center, expected);
        assert_eq!(map.zoom, 13);
    }
}

#[tokio::test]
async fn bad_manual_entry_is_a_silent_no_op() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);

    let outcome = assert_ok!(h.engine.locate_user(session.id, manual("abc", "77.5")).await);
    assert!(outcome.is_none());

    let missing = LocationSource::Manual {
        latitude: None,
        longitude: Some("77.5".into()),
    };
    assert!(assert_ok!(h.engine.locate_user(session.id, missing).await).is_none());

    let session = assert_ok!(h.engine.find_session(session.id).await);
    assert!(session.user_location.is_none());
    assert!(session.map.is_none());
}

#[tokio::test]
async fn positioning_failure_asks_for_manual_entry() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);

    let source = LocationSource::Device {
        result: PositionResult::Err(PositionError {
            code: PositionErrorCode::PermissionDenied,
            message: "User denied Geolocation".into(),
        }),
    };

    let err = assert_err!(h.engine.locate_user(session.id, source).await);
    assert_eq!(err.message, "Enable location or enter manually.");

    let source = LocationSource::Device {
        result: PositionResult::Ok(coordinate(12.90, 77.60)),
    };
    assert!(assert_ok!(h.engine.locate_user(session.id, source).await).is_some());
}

#[tokio::test]
async fn click_routes_from_user_and_shows_controls() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);

    let route = assert_ok!(h.engine.click_map(session.id, coordinate(12.95, 77.55)).await);

    assert_eq!(
        route.waypoints,
        vec![coordinate(12.90, 77.60), coordinate(12.95, 77.55)]
    );
    assert!(route.draggable);

    let session = assert_ok!(h.engine.find_session(session.id).await);
    assert!(session.controls_visible);
    assert_eq!(h.router.requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn new_route_replaces_the_old_one() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);

    let first = assert_ok!(h.engine.click_map(session.id, coordinate(12.95, 77.55)).await);
    let second = assert_ok!(h.engine.click_map(session.id, coordinate(12.80, 77.70)).await);

    let session = assert_ok!(h.engine.find_session(session.id).await);
    let drawn = session.route().unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(drawn.id, second.id);
}

#[tokio::test]
async fn failed_route_leaves_nothing_drawn() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);
    assert_ok!(h.engine.click_map(session.id, coordinate(12.95, 77.55)).await);

    let unreachable = coordinate(-12.0, -77.0);
    *h.router.unreachable.lock().unwrap() = Some(unreachable);

    let err = assert_err!(h.engine.click_map(session.id, unreachable).await);
    assert_eq!(err, no_route_error());

    let session = assert_ok!(h.engine.find_session(session.id).await);
    assert!(session.route().is_none());
    assert!(session.controls_visible);
}

#[tokio::test]
async fn failed_first_route_keeps_controls_hidden() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);

    let unreachable = coordinate(-12.0, -77.0);
    *h.router.unreachable.lock().unwrap() = Some(unreachable);

    assert_err!(h.engine.click_map(session.id, unreachable).await);

    let session = assert_ok!(h.engine.find_session(session.id).await);
    assert!(session.route().is_none());
    assert!(!session.controls_visible);
}

#[tokio::test]
async fn relocating_tears_down_route_and_hides_controls() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);
    assert_ok!(h.engine.navigate_to_facility(session.id).await);

    let map = assert_ok!(h.engine.locate_user(session.id, manual("28.61", "77.20")).await)
        .unwrap();

    assert!(map.route().is_none());
    assert_eq!(map.center, coordinate(28.61, 77.20));

    let session = assert_ok!(h.engine.find_session(session.id).await);
    assert!(session.route().is_none());
    assert!(!session.controls_visible);
    assert_eq!(session.user_location, Some(coordinate(28.61, 77.20)));
}

#[tokio::test]
async fn facility_shortcut_targets_the_facility() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);

    for (lat, lng) in [("12.90", "77.60"), ("28.61", "77.20")] {
        assert_ok!(h.engine.locate_user(session.id, manual(lat, lng)).await);

        let route = assert_ok!(h.engine.navigate_to_facility(session.id).await);

        assert_eq!(route.waypoints.last(), Some(&coordinate(12.9767, 77.5713)));
        assert_eq!(route.waypoints.last(), Some(&FACILITY_LOCATION));
        assert!(!route.draggable);
    }
}

#[tokio::test]
async fn routing_needs_a_location() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);

    let err = assert_err!(h.engine.navigate_to_facility(session.id).await);

    assert_eq!(err, location_required_error());
    assert!(h.router.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn confirmation_renders_once_and_schedules_one_redirect() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);

    let confirmation = assert_ok!(
        h.engine
            .confirm_pickup(session.id, PickupInput::new("10:30", "2024-05-01"))
            .await
    );

    assert_eq!(h.renderer.layouts.lock().unwrap().len(), 1);
    assert_eq!(confirmation.redirect.location, "/index2");
    assert_eq!(confirmation.redirect.delay_ms, 3000);
    assert_eq!(confirmation.file_name, "pickup-confirmation.pdf");

    let session = assert_ok!(h.engine.find_session(session.id).await);
    assert_eq!(session.redirect, Some(confirmation.redirect.clone()));

    let receipt = assert_ok!(h.engine.take_receipt(confirmation.receipt_id).await);
    assert_eq!(receipt.bytes, b"%PDF-fake".to_vec());
    assert_eq!(confirmation.download_url, receipt.download_url());

    assert_eq!(
        assert_err!(h.engine.take_receipt(confirmation.receipt_id).await),
        not_found_error()
    );
    assert!(h.engine.receipts.lock().await.is_empty());
}

#[tokio::test]
async fn missing_details_abort_the_confirmation() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);

    for input in [
        PickupInput::new("", "2024-05-01"),
        PickupInput::new("10:30", ""),
        PickupInput::default(),
    ] {
        let err = assert_err!(h.engine.confirm_pickup(session.id, input).await);
        assert_eq!(err, pickup_details_required_error());
    }

    assert!(h.renderer.layouts.lock().unwrap().is_empty());

    let session = assert_ok!(h.engine.find_session(session.id).await);
    assert!(session.redirect.is_none());
}

#[tokio::test]
async fn confirmation_reports_credits() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);

    let mut input = PickupInput::new("10:30", "2024-05-01");
    input.items.insert("Mobile".into(), 2);
    input.items.insert("Keyboard".into(), 1);

    let confirmation = assert_ok!(h.engine.confirm_pickup(session.id, input).await);

    assert_eq!(confirmation.credits, Some(19));
}

#[tokio::test]
async fn overflowing_quantities_are_rejected() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);

    let mut input = PickupInput::new("10:30", "2024-05-01");
    input.items.insert("Television".into(), 200_000_000);

    let err = assert_err!(h.engine.confirm_pickup(session.id, input).await);

    assert_eq!(err, invalid_input_error());
    assert!(h.renderer.layouts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn deleted_sessions_are_gone() {
    let h = harness();
    let session = assert_ok!(h.engine.create_session().await);
    assert_ok!(h.engine.locate_user(session.id, manual("12.90", "77.60")).await);

    let ended = assert_ok!(h.engine.delete_session(session.id).await);
    assert!(ended.user_location.is_some());

    assert_eq!(
        assert_err!(h.engine.find_session(session.id).await),
        not_found_error()
    );
    assert_eq!(
        assert_err!(h.engine.delete_session(session.id).await),
        not_found_error()
    );
    assert!(h.engine.sessions.lock().await.is_empty());
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let h = harness();
    let id = uuid::Uuid::new_v4();

    assert_eq!(
        assert_err!(h.engine.find_session(id).await),
        not_found_error()
    );
    assert_eq!(
        assert_err!(h.engine.take_receipt(id).await),
        not_found_error()
    );
}
