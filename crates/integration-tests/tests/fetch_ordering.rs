//! Ordering tests for overlapping fetches.
//!
//! Collection slots follow latest-request-wins semantics: each fetch takes
//! a sequence number at issue time, and a response whose sequence is no
//! longer the latest is discarded instead of overwriting newer data.

use std::sync::Arc;
use std::time::Duration;

use valet_integration_tests::{TestApi, fixtures};

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let api = TestApi::spawn().await;
    let session = Arc::new(api.session());

    // First request answers with yesterday's data after a delay; the
    // second answers immediately with the current data, so the responses
    // arrive in reverse issue order.
    api.seed_owners(vec![fixtures::owner(2, "Ada Price")]).await;
    api.stall_next_owner_list(
        vec![fixtures::owner(1, "Jane Doe")],
        Duration::from_millis(300),
    )
    .await;

    let slow_session = Arc::clone(&session);
    let slow = tokio::spawn(async move { slow_session.owners().fetch_all().await });

    // Make sure the slow fetch is issued (and sequenced) first.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let fast = session.owners().fetch_all().await.expect("fetch failed");
    assert_eq!(fast, vec![fixtures::owner(2, "Ada Price")]);

    // The slow call still returns its own response to its caller...
    let slow = slow
        .await
        .expect("task panicked")
        .expect("slow fetch failed");
    assert_eq!(slow, vec![fixtures::owner(1, "Jane Doe")]);

    // ...but the shared slot keeps the later-issued request's data.
    assert_eq!(
        session.owners().items().await,
        vec![fixtures::owner(2, "Ada Price")]
    );
}

#[tokio::test]
async fn test_sequential_fetches_take_the_latest_response() {
    let api = TestApi::spawn().await;
    let session = api.session();

    api.seed_owners(vec![fixtures::owner(1, "Jane Doe")]).await;
    session.owners().fetch_all().await.expect("fetch failed");

    api.seed_owners(vec![fixtures::owner(2, "Ada Price")]).await;
    session.owners().fetch_all().await.expect("fetch failed");

    assert_eq!(
        session.owners().items().await,
        vec![fixtures::owner(2, "Ada Price")]
    );
}
