//! Valet Client - Resource stores over the parking API.
//!
//! This crate wraps the remote parking-lot management REST API in typed,
//! in-memory resource stores. Each store holds the last fetched collection
//! of one entity type and exposes fetch/search/create/update/delete
//! operations that proxy to the API and keep the collection in sync with
//! the latest server response.
//!
//! # Architecture
//!
//! - [`ApiClient`] - thin HTTP accessor (base URL + verbs), transport only
//! - [`ResourceStore`] - one generic store, instantiated per entity type
//! - [`BookingStore`] - the booking instantiation plus its detailed
//!   projection and payment endpoints
//! - [`Session`] - explicitly constructed container owning the four stores
//!
//! # Consistency model
//!
//! Collections are caches that are only as fresh as the last full refresh.
//! `create`/`update`/`delete` never patch a collection in place; the only
//! way a mutation becomes visible in a store is a subsequent `fetch_all`
//! or `search`. On failure a collection keeps its last good value, so
//! stale data stays visible rather than flickering to empty.
//!
//! Every operation reports its outcome as a `Result<_, ApiError>` - the
//! store never swallows or logs failures on the caller's behalf.
//!
//! # Example
//!
//! ```rust,ignore
//! use valet_client::{ApiClient, ClientConfig, Session};
//!
//! let config = ClientConfig::from_env()?;
//! let session = Session::new(ApiClient::new(&config)?);
//!
//! let owners = session.owners().fetch_all().await?;
//! let created = session.owners().create(&NewCarOwner {
//!     full_name: "Jane Doe".into(),
//! }).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod config;
mod resource;
mod session;
mod store;

pub use client::{ApiClient, ApiError};
pub use config::{ClientConfig, ConfigError};
pub use resource::{Listable, Resource, Searchable};
pub use session::Session;
pub use store::{BookingStore, CarOwnerStore, CarStore, ParkingSpaceStore, ResourceStore};
