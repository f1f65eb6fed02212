//! HTTP request handlers.
//!
//! Controllers extract request data, build lookups, call the service layer and convert
//! domain models to DTOs. Authentication is applied by the router's guard layer, so
//! handlers only run for authorized requests.

pub mod conversation;
pub mod health;
pub mod message;
pub mod people;
pub mod rdv;

#[cfg(test)]
mod test;
