//! Database repository layer for the entity graph.
//!
//! Repositories wrap SeaORM queries for a single table each and return domain models,
//! keeping entity models inside this module. The `store` module composes them behind
//! the `EntityStore` trait, which is what the rest of the server depends on.

pub mod conversation;
pub mod message;
pub mod people;
pub mod rdv;
pub mod store;

#[cfg(test)]
mod test;
