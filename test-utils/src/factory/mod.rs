//! Factory methods for creating test data.
//!
//! Factories insert entity rows with sensible defaults straight through SeaORM active
//! models, bypassing the store's integrity checks so tests can arrange any state. Parent
//! rows must still exist where SQLite enforces a foreign key.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let rdv = factory::create_rdv(db).await?;
//! let people = factory::create_people(db, rdv.party_id).await?;
//!
//! // Or the whole chain at once
//! let (rdv, people, conversation) =
//!     factory::helpers::create_conversation_with_dependencies(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let rdv = factory::rdv_ext::RdvExtFactory::new(db)
//!     .party_id(1001)
//!     .infobip_external_id("agent-1")
//!     .build()
//!     .await?;
//! ```

pub mod conversation_ext;
pub mod helpers;
pub mod mensaje_ext;
pub mod people_ext;
pub mod rdv_ext;

pub use conversation_ext::create_conversation;
pub use mensaje_ext::create_message;
pub use people_ext::create_people;
pub use rdv_ext::create_rdv;
