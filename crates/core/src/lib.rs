//! Valet Core - Shared domain types.
//!
//! This crate provides the domain model used across all Valet components:
//! - `client` - Resource stores and the HTTP API client
//! - `cli` - Terminal front end (dashboard and booking views)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! entity mirrors the JSON shape the remote parking API produces, so the
//! structs here double as the wire format.
//!
//! # Modules
//!
//! - [`types`] - Entity types, draft (create) payloads, and newtype IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
