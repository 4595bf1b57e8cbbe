//! Generic resource store and its four instantiations.
//!
//! A store holds the in-memory collection of one resource type plus a
//! "current" selection slot, and proxies mutations to the API. The four
//! stores are the same construct parametrized by entity type and endpoint
//! wiring; only bookings carry extra endpoints, handled by [`BookingStore`].
//!
//! # Ordering
//!
//! Collection slots follow latest-request-wins semantics: each slot has a
//! monotonically increasing request sequence, and a response is discarded
//! if a newer request was issued while it was in flight. Two overlapping
//! fetches therefore always settle on the later-issued request's data,
//! regardless of arrival order.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::instrument;

use valet_core::{
    Booking, BookingDetailed, BookingId, Car, CarOwner, NewBooking, ParkingSpace, PaymentUpdate,
};

use crate::client::{ApiClient, ApiError};
use crate::resource::{Listable, Resource, Searchable};

/// Store for car owners.
pub type CarOwnerStore = ResourceStore<CarOwner>;
/// Store for cars.
pub type CarStore = ResourceStore<Car>;
/// Store for parking spaces.
pub type ParkingSpaceStore = ResourceStore<ParkingSpace>;

/// In-memory store for one API resource type.
///
/// Collections are replaced wholesale by `fetch_all`/`search` and never
/// patched incrementally: `create`, `update`, and `delete` go straight to
/// the API and leave the collections untouched. On a failed read the
/// previous collection value is kept, so callers keep rendering the last
/// good data.
pub struct ResourceStore<R: Resource> {
    client: ApiClient,
    items: RwLock<Vec<R>>,
    search_results: RwLock<Vec<R>>,
    current: RwLock<Option<R>>,
    fetch_seq: AtomicU64,
    search_seq: AtomicU64,
}

impl<R: Resource> ResourceStore<R> {
    /// Create an empty store backed by the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            items: RwLock::new(Vec::new()),
            search_results: RwLock::new(Vec::new()),
            current: RwLock::new(None),
            fetch_seq: AtomicU64::new(0),
            search_seq: AtomicU64::new(0),
        }
    }

    pub(crate) fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Snapshot of the last successfully fetched collection.
    pub async fn items(&self) -> Vec<R> {
        self.items.read().await.clone()
    }

    /// Snapshot of the last successful search result.
    pub async fn search_results(&self) -> Vec<R> {
        self.search_results.read().await.clone()
    }

    /// The currently selected entity, if any.
    pub async fn current(&self) -> Option<R> {
        self.current.read().await.clone()
    }

    /// Select (or clear) the current entity.
    pub async fn set_current(&self, entity: Option<R>) {
        *self.current.write().await = entity;
    }

    /// Create an entity from its draft payload.
    ///
    /// Returns the server-assigned full entity. The collection slots are
    /// not touched; re-fetch to make the new entity visible in `items`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all, fields(resource = R::BASE_PATH))]
    pub async fn create(&self, draft: &R::Draft) -> Result<R, ApiError> {
        self.client.post(R::BASE_PATH, draft).await
    }

    /// Update an entity by PUTting its full representation (id included).
    ///
    /// Returns the server's updated representation. The collection slots
    /// are not touched.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all, fields(resource = R::BASE_PATH))]
    pub async fn update(&self, entity: &R) -> Result<R, ApiError> {
        self.client.put(R::BASE_PATH, entity).await
    }

    /// Delete an entity by id.
    ///
    /// The collection slots are not touched; the deletion only becomes
    /// visible in `items` via a subsequent `fetch_all`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all, fields(resource = R::BASE_PATH, id = %id))]
    pub async fn delete(&self, id: R::Id) -> Result<(), ApiError> {
        self.client.delete(&format!("{}/{id}", R::BASE_PATH)).await
    }
}

impl<R: Listable> ResourceStore<R> {
    /// Fetch the full collection, replacing `items` wholesale on success.
    ///
    /// On failure `items` keeps its previous value.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all, fields(resource = R::BASE_PATH))]
    pub async fn fetch_all(&self) -> Result<Vec<R>, ApiError> {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let fetched: Vec<R> = self.client.get(R::LIST_PATH).await?;

        let mut items = self.items.write().await;
        // Replace only if no newer fetch was issued while this one was in
        // flight; a superseded response must not overwrite the slot.
        if self.fetch_seq.load(Ordering::SeqCst) == seq {
            items.clone_from(&fetched);
        }
        drop(items);

        Ok(fetched)
    }
}

impl<R: Searchable> ResourceStore<R> {
    /// Search the collection, replacing `search_results` wholesale on
    /// success. A non-matching query yields an empty result, not an error.
    ///
    /// On failure `search_results` keeps its previous value.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all, fields(resource = R::BASE_PATH, query))]
    pub async fn search(&self, query: &str) -> Result<Vec<R>, ApiError> {
        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let found: Vec<R> = self
            .client
            .get_with_query(R::SEARCH_PATH, &[(R::SEARCH_PARAM, query)])
            .await?;

        let mut results = self.search_results.write().await;
        if self.search_seq.load(Ordering::SeqCst) == seq {
            results.clone_from(&found);
        }
        drop(results);

        Ok(found)
    }
}

impl<R: Resource> std::fmt::Debug for ResourceStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("resource", &R::BASE_PATH)
            .finish_non_exhaustive()
    }
}

/// Store for bookings.
///
/// Wraps the generic store and adds the booking-only endpoints: the
/// detailed projection list, the single detailed lookup, and the narrow
/// payment-status PATCH.
pub struct BookingStore {
    store: ResourceStore<Booking>,
    detailed: RwLock<Vec<BookingDetailed>>,
    current_detailed: RwLock<Option<BookingDetailed>>,
    detailed_seq: AtomicU64,
}

impl BookingStore {
    /// Create an empty booking store backed by the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            store: ResourceStore::new(client),
            detailed: RwLock::new(Vec::new()),
            current_detailed: RwLock::new(None),
            detailed_seq: AtomicU64::new(0),
        }
    }

    /// Snapshot of the last successfully fetched bookings.
    pub async fn items(&self) -> Vec<Booking> {
        self.store.items().await
    }

    /// Snapshot of the last successfully fetched detailed bookings.
    pub async fn detailed(&self) -> Vec<BookingDetailed> {
        self.detailed.read().await.clone()
    }

    /// The detailed booking last loaded via [`Self::get_detailed`], if any.
    pub async fn current_detailed(&self) -> Option<BookingDetailed> {
        self.current_detailed.read().await.clone()
    }

    /// Fetch all bookings (plain shape). See [`ResourceStore::fetch_all`].
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn fetch_all(&self) -> Result<Vec<Booking>, ApiError> {
        self.store.fetch_all().await
    }

    /// Create a booking. See [`ResourceStore::create`].
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn create(&self, draft: &NewBooking) -> Result<Booking, ApiError> {
        self.store.create(draft).await
    }

    /// Update a booking. See [`ResourceStore::update`].
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn update(&self, booking: &Booking) -> Result<Booking, ApiError> {
        self.store.update(booking).await
    }

    /// Delete a booking by id. See [`ResourceStore::delete`].
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn delete(&self, id: BookingId) -> Result<(), ApiError> {
        self.store.delete(id).await
    }

    /// Fetch all bookings in the detailed projection, replacing the
    /// `detailed` slot wholesale on success.
    ///
    /// On failure the slot keeps its previous value.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn fetch_all_detailed(&self) -> Result<Vec<BookingDetailed>, ApiError> {
        let seq = self.detailed_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let fetched: Vec<BookingDetailed> =
            self.store.client().get("/booking/all/detailed").await?;

        let mut detailed = self.detailed.write().await;
        if self.detailed_seq.load(Ordering::SeqCst) == seq {
            detailed.clone_from(&fetched);
        }
        drop(detailed);

        Ok(fetched)
    }

    /// Fetch one booking in the detailed projection, storing it as the
    /// current detailed booking.
    ///
    /// # Errors
    ///
    /// Returns error if the booking is not found or the request fails; the
    /// current slot keeps its previous value on failure.
    #[instrument(skip(self), fields(booking_id = %id))]
    pub async fn get_detailed(&self, id: BookingId) -> Result<BookingDetailed, ApiError> {
        let fetched: BookingDetailed = self.store.client().get(&format!("/booking/{id}")).await?;
        *self.current_detailed.write().await = Some(fetched.clone());
        Ok(fetched)
    }

    /// Update a booking's payment status via the narrow PATCH endpoint.
    ///
    /// Returns the server's updated booking. The detailed slots are not
    /// touched; re-fetch to see the new status there.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(booking_id = %id, is_paid))]
    pub async fn update_payment(&self, id: BookingId, is_paid: bool) -> Result<Booking, ApiError> {
        self.store
            .client()
            .patch(&format!("/booking/{id}/payment"), &PaymentUpdate { is_paid })
            .await
    }
}

impl std::fmt::Debug for BookingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingStore").finish_non_exhaustive()
    }
}
