//! Session container owning the four resource stores.

use crate::client::ApiClient;
use crate::store::{BookingStore, CarOwnerStore, CarStore, ParkingSpaceStore};

/// Explicitly constructed store state for one application session.
///
/// Owns all four resource stores; nothing outside the stores' own
/// operations mutates their collections. Create one per application
/// session (one per CLI invocation, one per UI page session) rather than
/// sharing a process-wide singleton.
pub struct Session {
    owners: CarOwnerStore,
    cars: CarStore,
    spaces: ParkingSpaceStore,
    bookings: BookingStore,
}

impl Session {
    /// Create a session with empty stores over one shared API client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            owners: CarOwnerStore::new(client.clone()),
            cars: CarStore::new(client.clone()),
            spaces: ParkingSpaceStore::new(client.clone()),
            bookings: BookingStore::new(client),
        }
    }

    /// Car owner store.
    #[must_use]
    pub const fn owners(&self) -> &CarOwnerStore {
        &self.owners
    }

    /// Car store.
    #[must_use]
    pub const fn cars(&self) -> &CarStore {
        &self.cars
    }

    /// Parking space store.
    #[must_use]
    pub const fn spaces(&self) -> &ParkingSpaceStore {
        &self.spaces
    }

    /// Booking store.
    #[must_use]
    pub const fn bookings(&self) -> &BookingStore {
        &self.bookings
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
