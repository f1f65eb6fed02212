//! Token-authenticated read API over RDVs, people, conversations and their messages.

pub mod model;
pub mod server;
