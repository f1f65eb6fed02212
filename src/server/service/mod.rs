//! Service layer between the controllers and the entity store.
//!
//! Services work with domain models only. They compose store reads into the shapes the
//! endpoints return, such as an RDV with its people and conversations or a conversation
//! with its message timeline.

pub mod conversation;
pub mod message;
pub mod people;
pub mod rdv;
