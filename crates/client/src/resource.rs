//! Endpoint wiring for the four API resources.
//!
//! The stores are generic over these traits rather than hand-duplicated
//! per entity. `Resource` covers the operations every entity family has
//! (create, update, delete); `Listable` and `Searchable` mark the families
//! that additionally expose a list or search endpoint, so calling
//! `fetch_all` on a resource with no list endpoint is a compile error,
//! not a runtime 404.

use std::fmt::Display;

use serde::Serialize;
use serde::de::DeserializeOwned;

use valet_core::{
    Booking, BookingId, Car, CarId, CarOwner, NewBooking, NewCar, NewCarOwner, NewParkingSpace,
    OwnerId, ParkingSpace, SpaceId,
};

/// A server-owned entity type with its own REST endpoint family.
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Type-safe identifier for this resource.
    type Id: Display + Copy + Send + Sync;

    /// Create payload: the entity minus its server-assigned id.
    type Draft: Serialize + Send + Sync;

    /// Endpoint family root, e.g. `/car-owner`.
    ///
    /// Create POSTs and update PUTs go to this path; deletes to
    /// `{BASE_PATH}/{id}`.
    const BASE_PATH: &'static str;

    /// The entity's server-assigned id.
    fn id(&self) -> Self::Id;
}

/// A resource whose full collection can be fetched.
pub trait Listable: Resource {
    /// Collection endpoint, e.g. `/car-owner/all`.
    const LIST_PATH: &'static str;
}

/// A resource that can be searched by a single query parameter.
pub trait Searchable: Resource {
    /// Search endpoint, e.g. `/car-owner/search`.
    const SEARCH_PATH: &'static str;
    /// Query parameter name, e.g. `name`.
    const SEARCH_PARAM: &'static str;
}

impl Resource for CarOwner {
    type Id = OwnerId;
    type Draft = NewCarOwner;
    const BASE_PATH: &'static str = "/car-owner";

    fn id(&self) -> OwnerId {
        self.id
    }
}

impl Listable for CarOwner {
    const LIST_PATH: &'static str = "/car-owner/all";
}

impl Searchable for CarOwner {
    const SEARCH_PATH: &'static str = "/car-owner/search";
    const SEARCH_PARAM: &'static str = "name";
}

// Cars have no list endpoint; plate search is the only way to read them.
impl Resource for Car {
    type Id = CarId;
    type Draft = NewCar;
    const BASE_PATH: &'static str = "/car";

    fn id(&self) -> CarId {
        self.id
    }
}

impl Searchable for Car {
    const SEARCH_PATH: &'static str = "/car/search";
    const SEARCH_PARAM: &'static str = "number";
}

impl Resource for ParkingSpace {
    type Id = SpaceId;
    type Draft = NewParkingSpace;
    const BASE_PATH: &'static str = "/parking-space";

    fn id(&self) -> SpaceId {
        self.id
    }
}

impl Listable for ParkingSpace {
    const LIST_PATH: &'static str = "/parking-space/all";
}

impl Resource for Booking {
    type Id = BookingId;
    type Draft = NewBooking;
    const BASE_PATH: &'static str = "/booking";

    fn id(&self) -> BookingId {
        self.id
    }
}

impl Listable for Booking {
    const LIST_PATH: &'static str = "/booking/all";
}
