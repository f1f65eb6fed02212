//! Wire DTOs returned by the HTTP API.
//!
//! These types define the JSON shapes clients see and carry the OpenAPI schema
//! derivations. Server-side domain models convert into them at the controller boundary.

pub mod api;
pub mod conversation;
pub mod message;
pub mod people;
pub mod rdv;
