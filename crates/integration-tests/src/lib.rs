//! Integration tests for Valet.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p valet-integration-tests
//! ```
//!
//! # Harness
//!
//! [`TestApi`] runs an in-process axum stub of the parking API on an
//! ephemeral port, backed by in-memory collections. Tests seed the stub,
//! build a [`Session`](valet_client::Session) pointed at it, and assert on
//! store behavior. Two extra knobs drive the failure and ordering tests:
//!
//! - [`TestApi::set_failing`] - every endpoint answers 500
//! - [`TestApi::stall_next_owner_list`] - the next owner list request
//!   answers with a canned payload after a delay, so a test can make an
//!   earlier-issued fetch resolve after a later one

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use tokio::sync::Mutex;

use valet_client::{ApiClient, ClientConfig, Session};
use valet_core::{
    Booking, BookingDetailed, BookingId, Car, CarId, CarOwner, NewBooking, NewCar, NewCarOwner,
    NewParkingSpace, OwnerId, ParkingSpace, SpaceId,
};

pub mod fixtures;

/// Delayed canned answer for the next owner list request.
struct StalledOwnerList {
    owners: Vec<CarOwner>,
    delay: Duration,
}

/// In-memory state behind the stub API.
#[derive(Default)]
struct ApiState {
    owners: Mutex<Vec<CarOwner>>,
    cars: Mutex<Vec<Car>>,
    spaces: Mutex<Vec<ParkingSpace>>,
    bookings: Mutex<Vec<Booking>>,
    detailed: Mutex<Vec<BookingDetailed>>,
    next_id: AtomicI64,
    failing: AtomicBool,
    stalled_owner_list: Mutex<Option<StalledOwnerList>>,
}

impl ApiState {
    fn failing(&self) -> bool {
        self.failing.load(Ordering::SeqCst)
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

/// In-process stub of the parking API.
pub struct TestApi {
    addr: SocketAddr,
    state: Arc<ApiState>,
}

impl TestApi {
    /// Start the stub on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        let state = Arc::new(ApiState {
            next_id: AtomicI64::new(1),
            ..ApiState::default()
        });
        let app = router(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub API listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Stub API server error");
        });

        Self { addr, state }
    }

    /// Base URL of the stub.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Build a client session pointed at the stub.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be constructed.
    #[must_use]
    pub fn session(&self) -> Session {
        let config = ClientConfig::new(&self.url()).expect("Invalid stub URL");
        Session::new(ApiClient::new(&config).expect("Failed to build API client"))
    }

    /// Make every endpoint answer 500 (or restore normal behavior).
    pub fn set_failing(&self, failing: bool) {
        self.state.failing.store(failing, Ordering::SeqCst);
    }

    /// Answer the next owner list request with `owners` after `delay`,
    /// letting a later-issued request overtake it.
    pub async fn stall_next_owner_list(&self, owners: Vec<CarOwner>, delay: Duration) {
        *self.state.stalled_owner_list.lock().await = Some(StalledOwnerList { owners, delay });
    }

    pub async fn seed_owners(&self, owners: Vec<CarOwner>) {
        *self.state.owners.lock().await = owners;
    }

    pub async fn seed_cars(&self, cars: Vec<Car>) {
        *self.state.cars.lock().await = cars;
    }

    pub async fn seed_spaces(&self, spaces: Vec<ParkingSpace>) {
        *self.state.spaces.lock().await = spaces;
    }

    pub async fn seed_bookings(&self, bookings: Vec<Booking>) {
        *self.state.bookings.lock().await = bookings;
    }

    pub async fn seed_detailed(&self, detailed: Vec<BookingDetailed>) {
        *self.state.detailed.lock().await = detailed;
    }

    /// Set the next server-assigned id.
    pub fn set_next_id(&self, id: i64) {
        self.state.next_id.store(id, Ordering::SeqCst);
    }

    /// Server-side view of the owner collection.
    pub async fn owners(&self) -> Vec<CarOwner> {
        self.state.owners.lock().await.clone()
    }

    /// Server-side view of the booking collection.
    pub async fn bookings(&self) -> Vec<Booking> {
        self.state.bookings.lock().await.clone()
    }
}

fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/car-owner/all", get(list_owners))
        .route("/car-owner/search", get(search_owners))
        .route("/car-owner", post(create_owner).put(update_owner))
        .route("/car-owner/{id}", delete(delete_owner))
        .route("/car/search", get(search_cars))
        .route("/car", post(create_car).put(update_car))
        .route("/car/{id}", delete(delete_car))
        .route("/parking-space/all", get(list_spaces))
        .route("/parking-space", post(create_space).put(update_space))
        .route("/parking-space/{id}", delete(delete_space))
        .route("/booking/all", get(list_bookings))
        .route("/booking/all/detailed", get(list_bookings_detailed))
        .route("/booking", post(create_booking).put(update_booking))
        .route("/booking/{id}", get(get_booking_detailed).delete(delete_booking))
        .route("/booking/{id}/payment", patch(update_booking_payment))
        .with_state(state)
}

fn failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "stub failure").into_response()
}

// ---------------------------------------------------------------------------
// Car owner handlers
// ---------------------------------------------------------------------------

async fn list_owners(State(state): State<Arc<ApiState>>) -> Response {
    if state.failing() {
        return failure();
    }
    let stalled = state.stalled_owner_list.lock().await.take();
    if let Some(stalled) = stalled {
        tokio::time::sleep(stalled.delay).await;
        return Json(stalled.owners).into_response();
    }
    Json(state.owners.lock().await.clone()).into_response()
}

#[derive(Deserialize)]
struct NameQuery {
    name: String,
}

async fn search_owners(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<NameQuery>,
) -> Response {
    if state.failing() {
        return failure();
    }
    let matches: Vec<CarOwner> = state
        .owners
        .lock()
        .await
        .iter()
        .filter(|o| o.full_name.contains(&query.name))
        .cloned()
        .collect();
    Json(matches).into_response()
}

async fn create_owner(
    State(state): State<Arc<ApiState>>,
    Json(draft): Json<NewCarOwner>,
) -> Response {
    if state.failing() {
        return failure();
    }
    let owner = CarOwner {
        id: OwnerId::new(state.assign_id()),
        full_name: draft.full_name,
    };
    state.owners.lock().await.push(owner.clone());
    Json(owner).into_response()
}

async fn update_owner(State(state): State<Arc<ApiState>>, Json(owner): Json<CarOwner>) -> Response {
    if state.failing() {
        return failure();
    }
    let mut owners = state.owners.lock().await;
    match owners.iter_mut().find(|o| o.id == owner.id) {
        Some(existing) => {
            *existing = owner.clone();
            Json(owner).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_owner(State(state): State<Arc<ApiState>>, Path(id): Path<i64>) -> Response {
    if state.failing() {
        return failure();
    }
    state
        .owners
        .lock()
        .await
        .retain(|o| o.id != OwnerId::new(id));
    StatusCode::NO_CONTENT.into_response()
}

// ---------------------------------------------------------------------------
// Car handlers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct NumberQuery {
    number: String,
}

async fn search_cars(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<NumberQuery>,
) -> Response {
    if state.failing() {
        return failure();
    }
    let matches: Vec<Car> = state
        .cars
        .lock()
        .await
        .iter()
        .filter(|c| c.number.contains(&query.number))
        .cloned()
        .collect();
    Json(matches).into_response()
}

async fn create_car(State(state): State<Arc<ApiState>>, Json(draft): Json<NewCar>) -> Response {
    if state.failing() {
        return failure();
    }
    let car = Car {
        id: CarId::new(state.assign_id()),
        number: draft.number,
        owner: draft.owner,
    };
    state.cars.lock().await.push(car.clone());
    Json(car).into_response()
}

async fn update_car(State(state): State<Arc<ApiState>>, Json(car): Json<Car>) -> Response {
    if state.failing() {
        return failure();
    }
    let mut cars = state.cars.lock().await;
    match cars.iter_mut().find(|c| c.id == car.id) {
        Some(existing) => {
            *existing = car.clone();
            Json(car).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_car(State(state): State<Arc<ApiState>>, Path(id): Path<i64>) -> Response {
    if state.failing() {
        return failure();
    }
    state.cars.lock().await.retain(|c| c.id != CarId::new(id));
    StatusCode::NO_CONTENT.into_response()
}

// ---------------------------------------------------------------------------
// Parking space handlers
// ---------------------------------------------------------------------------

async fn list_spaces(State(state): State<Arc<ApiState>>) -> Response {
    if state.failing() {
        return failure();
    }
    Json(state.spaces.lock().await.clone()).into_response()
}

async fn create_space(
    State(state): State<Arc<ApiState>>,
    Json(draft): Json<NewParkingSpace>,
) -> Response {
    if state.failing() {
        return failure();
    }
    let space = ParkingSpace {
        id: SpaceId::new(state.assign_id()),
        number: draft.number,
        is_available: draft.is_available,
    };
    state.spaces.lock().await.push(space.clone());
    Json(space).into_response()
}

async fn update_space(
    State(state): State<Arc<ApiState>>,
    Json(space): Json<ParkingSpace>,
) -> Response {
    if state.failing() {
        return failure();
    }
    let mut spaces = state.spaces.lock().await;
    match spaces.iter_mut().find(|s| s.id == space.id) {
        Some(existing) => {
            *existing = space.clone();
            Json(space).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_space(State(state): State<Arc<ApiState>>, Path(id): Path<i64>) -> Response {
    if state.failing() {
        return failure();
    }
    state
        .spaces
        .lock()
        .await
        .retain(|s| s.id != SpaceId::new(id));
    StatusCode::NO_CONTENT.into_response()
}

// ---------------------------------------------------------------------------
// Booking handlers
// ---------------------------------------------------------------------------

async fn list_bookings(State(state): State<Arc<ApiState>>) -> Response {
    if state.failing() {
        return failure();
    }
    Json(state.bookings.lock().await.clone()).into_response()
}

async fn list_bookings_detailed(State(state): State<Arc<ApiState>>) -> Response {
    if state.failing() {
        return failure();
    }
    Json(state.detailed.lock().await.clone()).into_response()
}

async fn get_booking_detailed(State(state): State<Arc<ApiState>>, Path(id): Path<i64>) -> Response {
    if state.failing() {
        return failure();
    }
    let detailed = state.detailed.lock().await;
    match detailed.iter().find(|d| d.id == BookingId::new(id)) {
        Some(found) => Json(found.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(draft): Json<NewBooking>,
) -> Response {
    if state.failing() {
        return failure();
    }
    let booking = Booking {
        id: BookingId::new(state.assign_id()),
        car_id: draft.car_id,
        parking_space_id: draft.parking_space_id,
        is_paid: draft.is_paid,
    };
    state.bookings.lock().await.push(booking.clone());
    Json(booking).into_response()
}

async fn update_booking(
    State(state): State<Arc<ApiState>>,
    Json(booking): Json<Booking>,
) -> Response {
    if state.failing() {
        return failure();
    }
    let mut bookings = state.bookings.lock().await;
    match bookings.iter_mut().find(|b| b.id == booking.id) {
        Some(existing) => {
            *existing = booking.clone();
            Json(booking).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_booking(State(state): State<Arc<ApiState>>, Path(id): Path<i64>) -> Response {
    if state.failing() {
        return failure();
    }
    state
        .bookings
        .lock()
        .await
        .retain(|b| b.id != BookingId::new(id));
    StatusCode::NO_CONTENT.into_response()
}

async fn update_booking_payment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(update): Json<valet_core::PaymentUpdate>,
) -> Response {
    if state.failing() {
        return failure();
    }
    let id = BookingId::new(id);

    let mut bookings = state.bookings.lock().await;
    let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    booking.is_paid = update.is_paid;
    let updated = booking.clone();
    drop(bookings);

    // Keep the detailed projection consistent with the plain collection.
    let mut detailed = state.detailed.lock().await;
    if let Some(entry) = detailed.iter_mut().find(|d| d.id == id) {
        entry.is_paid = update.is_paid;
    }
    drop(detailed);

    Json(updated).into_response()
}
