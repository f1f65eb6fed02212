//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types describe store
//! writes and lookups independently of the persistence technology.

pub mod conversation;
pub mod message;
pub mod people;
pub mod rdv;
