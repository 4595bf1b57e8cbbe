//! Integration tests for the booking store and its detailed projection.

use valet_client::ApiError;
use valet_core::{BookingId, CarId, NewBooking, SpaceId};

use valet_integration_tests::{TestApi, fixtures};

#[tokio::test]
async fn test_plain_and_detailed_slots_are_separate() {
    let api = TestApi::spawn().await;
    let session = api.session();

    let jane = fixtures::owner(1, "Jane Doe");
    let car = fixtures::car(10, "AB123CD", jane);
    let space = fixtures::space(20, "A-12", false);
    api.seed_bookings(vec![fixtures::booking(3, 10, 20, false)])
        .await;
    api.seed_detailed(vec![fixtures::booking_detailed(3, car, space)])
        .await;

    let plain = session.bookings().fetch_all().await.expect("fetch failed");
    assert_eq!(plain, vec![fixtures::booking(3, 10, 20, false)]);
    assert!(session.bookings().detailed().await.is_empty());

    let detailed = session
        .bookings()
        .fetch_all_detailed()
        .await
        .expect("fetch failed");
    assert_eq!(detailed.len(), 1);
    assert_eq!(session.bookings().detailed().await, detailed);
    assert_eq!(session.bookings().items().await, plain);
}

#[tokio::test]
async fn test_get_detailed_sets_current() {
    let api = TestApi::spawn().await;
    let session = api.session();

    let jane = fixtures::owner(1, "Jane Doe");
    let car = fixtures::car(10, "AB123CD", jane);
    let space = fixtures::space(20, "A-12", false);
    api.seed_detailed(vec![fixtures::booking_detailed(3, car, space)])
        .await;

    assert!(session.bookings().current_detailed().await.is_none());

    let detailed = session
        .bookings()
        .get_detailed(BookingId::new(3))
        .await
        .expect("get failed");
    assert_eq!(detailed.car.number, "AB123CD");
    assert_eq!(session.bookings().current_detailed().await, Some(detailed));
}

#[tokio::test]
async fn test_get_detailed_missing_is_not_found() {
    let api = TestApi::spawn().await;
    let session = api.session();

    let result = session.bookings().get_detailed(BookingId::new(99)).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
    assert!(session.bookings().current_detailed().await.is_none());
}

#[tokio::test]
async fn test_create_booking_returns_server_id() {
    let api = TestApi::spawn().await;
    let session = api.session();
    api.set_next_id(3);

    let created = session
        .bookings()
        .create(&NewBooking {
            car_id: CarId::new(10),
            parking_space_id: SpaceId::new(20),
            is_paid: false,
        })
        .await
        .expect("create failed");
    assert_eq!(created, fixtures::booking(3, 10, 20, false));
    assert!(session.bookings().items().await.is_empty());
}

#[tokio::test]
async fn test_update_payment_roundtrip() {
    let api = TestApi::spawn().await;
    let session = api.session();

    api.seed_bookings(vec![fixtures::booking(3, 10, 20, false)])
        .await;

    let updated = session
        .bookings()
        .update_payment(BookingId::new(3), true)
        .await
        .expect("payment update failed");
    assert!(updated.is_paid);

    // Visible in the collection only after a refetch.
    session.bookings().fetch_all().await.expect("fetch failed");
    assert_eq!(
        session.bookings().items().await,
        vec![fixtures::booking(3, 10, 20, true)]
    );
}

#[tokio::test]
async fn test_update_payment_failure_leaves_slots_unchanged() {
    let api = TestApi::spawn().await;
    let session = api.session();

    let jane = fixtures::owner(1, "Jane Doe");
    let car = fixtures::car(10, "AB123CD", jane);
    let space = fixtures::space(20, "A-12", false);
    api.seed_bookings(vec![fixtures::booking(3, 10, 20, false)])
        .await;
    api.seed_detailed(vec![fixtures::booking_detailed(3, car, space)])
        .await;

    let before_detailed = session
        .bookings()
        .fetch_all_detailed()
        .await
        .expect("fetch failed");
    let before_current = session
        .bookings()
        .get_detailed(BookingId::new(3))
        .await
        .expect("get failed");

    api.set_failing(true);
    let result = session
        .bookings()
        .update_payment(BookingId::new(3), true)
        .await;
    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));

    assert_eq!(session.bookings().detailed().await, before_detailed);
    assert_eq!(
        session.bookings().current_detailed().await,
        Some(before_current)
    );
}

#[tokio::test]
async fn test_delete_booking_observable_via_refetch() {
    let api = TestApi::spawn().await;
    let session = api.session();

    api.seed_bookings(vec![
        fixtures::booking(3, 10, 20, false),
        fixtures::booking(4, 11, 21, true),
    ])
    .await;
    session.bookings().fetch_all().await.expect("fetch failed");

    session
        .bookings()
        .delete(BookingId::new(3))
        .await
        .expect("delete failed");
    assert_eq!(session.bookings().items().await.len(), 2);

    session.bookings().fetch_all().await.expect("fetch failed");
    assert_eq!(
        session.bookings().items().await,
        vec![fixtures::booking(4, 11, 21, true)]
    );
}
